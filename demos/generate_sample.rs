use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::Path;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

const HEADER: &str = "transaction_id,bill_id,date,store_id,store_location,customer_id,customer_segment,product_id,product_category,product_name,quantity,unit_price,payment_method,channel,discount_applied";

const STORES: [(&str, &str); 4] = [
    ("S1", "Downtown"),
    ("S2", "Uptown"),
    ("S3", "Suburbs"),
    ("S4", "Airport")
];

// (product_id, category, name, unit price in cents)
const PRODUCTS: [(&str, &str, &str, i64); 12] = [
    ("P101", "Grocery", "Basmati Rice 5kg", 1250),
    ("P102", "Grocery", "Olive Oil 1L", 899),
    ("P103", "Dairy", "Greek Yogurt", 240),
    ("P104", "Dairy", "Cheddar Block", 640),
    ("P201", "Electronics", "Wireless Earbuds", 5999),
    ("P202", "Electronics", "USB-C Charger", 1999),
    ("P203", "Electronics", "Bluetooth Speaker", 4450),
    ("P301", "Home", "Ceramic Mug Set", 1400),
    ("P302", "Home", "Scented Candle", 800),
    ("P401", "Snacks", "Trail Mix", 375),
    ("P402", "Snacks", "Dark Chocolate", 299),
    ("P501", "Beverages", "Cold Brew Coffee", 450)
];

const SEGMENTS: [&str; 3] = ["Regular", "New", "Loyal"];
const PAYMENT_METHODS: [&str; 4] = ["Cash", "Card", "UPI", "Wallet"];
const CHANNELS: [&str; 2] = ["In-store", "Online"];
const DISCOUNT_PERCENTAGES: [i64; 3] = [5, 10, 15];

const PROBABILITY_DISCOUNT: f64 = 0.3;
const NUM_CUSTOMERS: usize = 60;
const NUM_DAYS: u64 = 30;

struct GeneratorConfig {
    num_lines: usize,
    output_path: String
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_lines = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(200);
        let output_path = args.get(2).cloned().unwrap_or_else(|| "samples/urbanmart_sales_generated.csv".to_string());

        Self {
            num_lines,
            output_path
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!("Generating {} transaction lines in {}...", config.num_lines, config.output_path);

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = io::BufWriter::new(file);

    writeln!(writer, "{HEADER}")?;

    let first_day = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or_else(|| io::Error::other("invalid start date"))?;
    let mut rng = rand::thread_rng();
    let mut transaction_id = 0;
    let mut bill_id = 0;

    while transaction_id < config.num_lines {
        bill_id += 1;

        let bill = generate_bill(&mut rng, first_day)?;
        let bill_size = rng.gen_range(1..=3).min(config.num_lines - transaction_id);

        for _ in 0..bill_size {
            transaction_id += 1;
            generate_line(&mut writer, &mut rng, &bill, transaction_id, bill_id)?;
        }
    }

    writer.flush()?;

    println!("Generation complete.");

    Ok(())
}

/// Attributes shared by every line of one checkout.
struct Bill {
    date: NaiveDate,
    store: (&'static str, &'static str),
    customer_id: String,
    segment: &'static str,
    payment_method: &'static str,
    channel: &'static str
}

fn generate_bill<R: Rng>(rng: &mut R, first_day: NaiveDate) -> io::Result<Bill> {
    let date = first_day
        .checked_add_days(Days::new(rng.gen_range(0..NUM_DAYS)))
        .ok_or_else(|| io::Error::other("date out of range"))?;
    let customer = rng.gen_range(1..=NUM_CUSTOMERS);

    Ok(Bill {
        date,
        store: *STORES.choose(rng).unwrap_or(&STORES[0]),
        customer_id: format!("CUST{customer:03}"),
        // a customer keeps the same segment across bills
        segment: SEGMENTS[customer % SEGMENTS.len()],
        payment_method: PAYMENT_METHODS.choose(rng).copied().unwrap_or(PAYMENT_METHODS[0]),
        channel: CHANNELS.choose(rng).copied().unwrap_or(CHANNELS[0])
    })
}

fn generate_line<W: Write, R: Rng>(writer: &mut W, rng: &mut R, bill: &Bill, transaction_id: usize, bill_id: usize) -> io::Result<()> {
    let (product_id, category, name, cents) = *PRODUCTS.choose(rng).unwrap_or(&PRODUCTS[0]);
    let quantity: u32 = rng.gen_range(1..=5);
    let unit_price = Decimal::new(cents, 2);
    let discount = generate_discount(rng, unit_price * Decimal::from(quantity));

    writeln!(
        writer,
        "TXN{:05},BILL{:04},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        transaction_id,
        bill_id,
        bill.date,
        bill.store.0,
        bill.store.1,
        bill.customer_id,
        bill.segment,
        product_id,
        category,
        name,
        quantity,
        unit_price,
        bill.payment_method,
        bill.channel,
        discount
    )
}

fn generate_discount<R: Rng>(rng: &mut R, subtotal: Decimal) -> Decimal {
    if !rng.gen_bool(PROBABILITY_DISCOUNT) {
        return Decimal::new(0, 2);
    }

    let percentage = DISCOUNT_PERCENTAGES.choose(rng).copied().unwrap_or(DISCOUNT_PERCENTAGES[0]);

    (subtotal * Decimal::new(percentage, 2)).round_dp(2)
}
