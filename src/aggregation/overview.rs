use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::TransactionLine;
use crate::types::{Channel, CustomerId, StoreId};

/// Sanity-check figures printed when a dataset is first opened.
///
/// Lists keep the order in which values first appear in the data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetOverview {
    pub row_count: usize,
    pub store_ids: Vec<StoreId>,
    /// Earliest and latest date, `None` for an empty dataset.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub categories: Vec<String>,
    pub store_locations: Vec<String>,
    /// Store id to the location on its last line, listed in first-seen id order.
    pub store_mapping: Vec<(StoreId, String)>,
    pub online_count: usize,
    pub in_store_count: usize
}

pub fn dataset_overview<'a, I>(lines: I) -> DatasetOverview
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut overview = DatasetOverview::default();
    let mut store_slots = HashMap::<&str, usize>::new();
    let mut seen_categories = HashSet::new();
    let mut seen_locations = HashSet::new();

    for line in lines {
        overview.row_count += 1;

        match store_slots.get(line.store_id.as_str()) {
            Some(&slot) => {
                let (_, location) = &mut overview.store_mapping[slot];

                if *location != line.store_location {
                    location.clone_from(&line.store_location);
                }
            }
            None => {
                store_slots.insert(line.store_id.as_str(), overview.store_mapping.len());
                overview.store_ids.push(line.store_id.clone());
                overview.store_mapping.push((line.store_id.clone(), line.store_location.clone()));
            }
        }

        if seen_categories.insert(line.product_category.as_str()) {
            overview.categories.push(line.product_category.clone());
        }

        if seen_locations.insert(line.store_location.as_str()) {
            overview.store_locations.push(line.store_location.clone());
        }

        overview.date_range = match overview.date_range {
            Some((first, last)) => Some((first.min(line.date), last.max(line.date))),
            None => Some((line.date, line.date))
        };

        match line.channel {
            Channel::Online => overview.online_count += 1,
            Channel::InStore => overview.in_store_count += 1
        }
    }

    overview
}

/// Maps each customer to the segment recorded on their first line.
pub fn customer_segments<'a, I>(lines: I) -> HashMap<&'a CustomerId, &'a str>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut segments = HashMap::new();

    for line in lines {
        segments.entry(&line.customer_id).or_insert(line.customer_segment.as_str());
    }

    segments
}
