use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::aggregation::{
    customer_segments, daily_revenue, revenue_by_group, revenue_by_weekday, summary_statistics, top_n, total_revenue,
    GroupKey, Metric, SalesFilter
};
use crate::console::export::export_to_path;
use crate::console::format::format_currency;
use crate::console::input::{parse_filter, FilterAnswers};
use crate::console::report::{
    write_daily_trend, write_grouped, write_heading, write_ranking, write_sample, write_statistics, write_weekdays
};
use crate::models::TransactionLine;
use crate::storage::SalesTable;

const TOP_RANKING_SIZE: i64 = 5;
const SAMPLE_SIZE: usize = 20;
const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TotalRevenue,
    RevenueByStore,
    TopProducts,
    SummaryStatistics,
    Breakdowns,
    DailyTrend,
    TopCustomers,
    SetFilters,
    Export,
    RawSample,
    Exit
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1" => Ok(MenuChoice::TotalRevenue),
            "2" => Ok(MenuChoice::RevenueByStore),
            "3" => Ok(MenuChoice::TopProducts),
            "4" => Ok(MenuChoice::SummaryStatistics),
            "5" => Ok(MenuChoice::Breakdowns),
            "6" => Ok(MenuChoice::DailyTrend),
            "7" => Ok(MenuChoice::TopCustomers),
            "8" => Ok(MenuChoice::SetFilters),
            "9" => Ok(MenuChoice::Export),
            "10" => Ok(MenuChoice::RawSample),
            "0" => Ok(MenuChoice::Exit),
            other => Err(other.to_string())
        }
    }
}

/// Interactive analytics menu over a loaded table.
///
/// Every report runs against the lines that pass the current filter.
pub struct Menu<'a, R, W> {
    table: &'a SalesTable,
    filter: SalesFilter,
    input: R,
    output: W
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(table: &'a SalesTable, input: R, output: W) -> Self {
        Self {
            table,
            filter: SalesFilter::new(),
            input,
            output
        }
    }

    /// Runs until the exit option is chosen or the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;

            let Some(answer) = self.prompt("\nEnter your choice (0-10): ")? else {
                writeln!(self.output, "\n\n✓ Input closed. Goodbye!")?;
                break;
            };

            let choice = match MenuChoice::from_str(&answer) {
                Ok(choice) => choice,
                Err(other) => {
                    debug!("Unknown menu choice [{other}]");
                    writeln!(self.output, "\n⚠ Invalid choice! Please enter a number between 0 and 10.")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "\n✓ Thank you for using UrbanMart Sales Analytics!")?;
                writeln!(self.output, "Goodbye!\n")?;
                break;
            }

            if !self.handle(choice)? {
                writeln!(self.output, "\n\n✓ Input closed. Goodbye!")?;
                break;
            }
        }

        self.output.flush()
    }

    /// Executes one menu choice. Returns `false` when the input closed mid-prompt.
    fn handle(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::TotalRevenue => self.show_total_revenue()?,
            MenuChoice::RevenueByStore => self.show_revenue_by_store()?,
            MenuChoice::TopProducts => self.show_top_products()?,
            MenuChoice::SummaryStatistics => self.show_summary_statistics()?,
            MenuChoice::Breakdowns => self.show_breakdowns()?,
            MenuChoice::DailyTrend => self.show_daily_trend()?,
            MenuChoice::TopCustomers => self.show_top_customers()?,
            MenuChoice::RawSample => self.show_raw_sample()?,
            MenuChoice::SetFilters => return self.set_filters(),
            MenuChoice::Export => return self.export(),
            MenuChoice::Exit => {}
        }

        Ok(true)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "URBANMART SALES ANALYTICS MENU")?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "1. Show Total Revenue")?;
        writeln!(self.output, "2. Show Revenue by Store")?;
        writeln!(self.output, "3. Show Top 5 Products by Revenue")?;
        writeln!(self.output, "4. Show Summary Statistics")?;
        writeln!(self.output, "5. Show Revenue Breakdowns")?;
        writeln!(self.output, "6. Show Daily Revenue Trend")?;
        writeln!(self.output, "7. Show Top 5 Customers by Revenue")?;
        writeln!(self.output, "8. Set Filters")?;
        writeln!(self.output, "9. Export Filtered Data to CSV")?;
        writeln!(self.output, "10. Show Raw Data Sample")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))
    }

    /// Prints `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut answer = String::new();

        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        Ok(Some(answer.trim().to_string()))
    }

    fn view(&self) -> Vec<&'a TransactionLine> {
        self.filter.apply(self.table.lines())
    }

    fn write_scope(&mut self, matched: usize) -> io::Result<()> {
        writeln!(self.output, "Filtered records: {} / {}", matched, self.table.len())?;
        writeln!(self.output, "Active filters: {}", self.filter)
    }

    fn show_total_revenue(&mut self) -> io::Result<()> {
        let view = self.view();

        write_heading(&mut self.output, "Total Revenue")?;
        self.write_scope(view.len())?;
        writeln!(self.output, "Total Revenue: {}", format_currency(total_revenue(view)))
    }

    fn show_revenue_by_store(&mut self) -> io::Result<()> {
        let view = self.view();

        write_heading(&mut self.output, "Revenue by Store")?;
        self.write_scope(view.len())?;
        write_grouped(&mut self.output, &revenue_by_group(view, GroupKey::StoreLocation))
    }

    fn show_top_products(&mut self) -> io::Result<()> {
        let view = self.view();
        let by_revenue = top_n(view.iter().copied(), GroupKey::Product, TOP_RANKING_SIZE, Metric::Revenue);
        let by_quantity = top_n(view.iter().copied(), GroupKey::Product, TOP_RANKING_SIZE, Metric::Quantity);

        write_heading(&mut self.output, "Top 5 Products by Revenue")?;
        self.write_scope(view.len())?;
        write_ranking(&mut self.output, "Product Name", Metric::Revenue, &by_revenue, |_| None)?;

        write_heading(&mut self.output, "Top 5 Products by Units Sold")?;
        write_ranking(&mut self.output, "Product Name", Metric::Quantity, &by_quantity, |_| None)
    }

    fn show_summary_statistics(&mut self) -> io::Result<()> {
        let view = self.view();
        let statistics = summary_statistics(view.iter().copied());
        let top_store = top_n(view.iter().copied(), GroupKey::StoreLocation, 1, Metric::Revenue);
        let top_category = top_n(view.iter().copied(), GroupKey::Category, 1, Metric::Revenue);
        let best_day = top_n(view.iter().copied(), GroupKey::DayOfWeek, 1, Metric::Revenue);

        write_heading(&mut self.output, "Summary Statistics")?;
        self.write_scope(view.len())?;
        write_statistics(&mut self.output, &statistics)?;

        if let Some(store) = top_store.first() {
            writeln!(self.output, "Top Store: {} ({})", store.key, format_currency(store.value))?;
        }

        if let Some(category) = top_category.first() {
            writeln!(self.output, "Top Category: {} ({})", category.key, format_currency(category.value))?;
        }

        if let Some(day) = best_day.first() {
            writeln!(self.output, "Best Day: {} ({})", day.key, format_currency(day.value))?;
        }

        write_heading(&mut self.output, "Revenue by Category")?;
        write_grouped(&mut self.output, &revenue_by_group(view, GroupKey::Category))
    }

    fn show_breakdowns(&mut self) -> io::Result<()> {
        let view = self.view();

        for key in [GroupKey::StoreId, GroupKey::Category, GroupKey::Channel, GroupKey::PaymentMethod, GroupKey::Segment] {
            write_heading(&mut self.output, &format!("Revenue by {}", key.label()))?;
            self.write_scope(view.len())?;
            write_grouped(&mut self.output, &revenue_by_group(view.iter().copied(), key))?;
        }

        write_heading(&mut self.output, "Revenue by Day of Week")?;
        self.write_scope(view.len())?;
        write_weekdays(&mut self.output, &revenue_by_weekday(view))
    }

    fn show_daily_trend(&mut self) -> io::Result<()> {
        let view = self.view();

        write_heading(&mut self.output, "Daily Revenue Trend")?;
        self.write_scope(view.len())?;
        write_daily_trend(&mut self.output, &daily_revenue(view))
    }

    fn show_top_customers(&mut self) -> io::Result<()> {
        let view = self.view();
        let ranking = top_n(view.iter().copied(), GroupKey::Customer, TOP_RANKING_SIZE, Metric::Revenue);
        let segments = customer_segments(view.iter().copied());

        write_heading(&mut self.output, "Top 5 Customers by Revenue")?;
        self.write_scope(view.len())?;
        write_ranking(&mut self.output, "Customer ID", Metric::Revenue, &ranking, |entry| {
            segments.get(&entry.key).map(|segment| segment.to_string())
        })
    }

    fn show_raw_sample(&mut self) -> io::Result<()> {
        let view = self.view();

        write_heading(&mut self.output, "Raw Data Sample")?;
        self.write_scope(view.len())?;
        write_sample(&mut self.output, &view, SAMPLE_SIZE)
    }

    fn set_filters(&mut self) -> io::Result<bool> {
        write_heading(&mut self.output, "Set Filters")?;
        writeln!(self.output, "Leave an answer blank to remove that restriction.")?;

        let prompts = [
            "Start date (YYYY-MM-DD): ",
            "End date (YYYY-MM-DD): ",
            "Store locations (comma-separated): ",
            "Channel (All, Online, In-store): ",
            "Product categories (comma-separated): "
        ];
        let mut answers = Vec::with_capacity(prompts.len());

        for label in prompts {
            let Some(answer) = self.prompt(label)? else {
                return Ok(false);
            };
            answers.push(answer);
        }

        let mut answers = answers.into_iter();
        let answers = FilterAnswers {
            start: answers.next().unwrap_or_default(),
            end: answers.next().unwrap_or_default(),
            store_locations: answers.next().unwrap_or_default(),
            channel: answers.next().unwrap_or_default(),
            categories: answers.next().unwrap_or_default()
        };

        match parse_filter(&answers) {
            Ok(filter) => {
                self.filter = filter;
                info!("Filters updated: {:?}", self.filter);
                let matched = self.view().len();
                writeln!(self.output, "\n✓ Filters applied.")?;
                self.write_scope(matched)?;
            }
            Err(error) => {
                warn!("Rejected filter input: {error}");
                writeln!(self.output, "\n❌ Error: {error}")?;
                writeln!(self.output, "Filters left unchanged.")?;
            }
        }

        Ok(true)
    }

    fn export(&mut self) -> io::Result<bool> {
        write_heading(&mut self.output, "Export Filtered Data")?;

        let Some(answer) = self.prompt("Output file path: ")? else {
            return Ok(false);
        };

        if answer.is_empty() {
            writeln!(self.output, "No path given, nothing exported.")?;
            return Ok(true);
        }

        match export_to_path(self.view(), Path::new(&answer)) {
            Ok(written) => {
                info!("Exported [{written}] lines to [{answer}]");
                writeln!(self.output, "✓ Exported {written} records to {answer}")?;
            }
            Err(error) => {
                warn!("Export failed: {error:#}");
                writeln!(self.output, "❌ Error: {error:#}")?;
            }
        }

        Ok(true)
    }
}
