use super::{Channel, ChannelError, ChannelFilter};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_channel_parses_dataset_and_typed_spellings() -> Result<()> {
    let test_cases = vec![
        ("Online", Channel::Online),
        ("online", Channel::Online),
        ("In-store", Channel::InStore),
        ("  in-store ", Channel::InStore),
        ("instore", Channel::InStore),
    ];

    for (input_string, expected) in test_cases {
        assert_eq!(Channel::from_str(input_string)?, expected);
    }

    Ok(())
}

#[test]
fn test_channel_rejects_unknown_names() {
    assert_eq!(Channel::from_str("Mail order"), Err(ChannelError::Unknown("Mail order".to_string())));
    assert!(Channel::from_str("").is_err());
}

#[test]
fn test_channel_displays_dataset_spelling() {
    assert_eq!(Channel::Online.to_string(), "Online");
    assert_eq!(Channel::InStore.to_string(), "In-store");
}

#[test]
fn test_channel_filter_all_matches_every_channel() {
    assert!(ChannelFilter::All.matches(Channel::Online));
    assert!(ChannelFilter::All.matches(Channel::InStore));
}

#[test]
fn test_channel_filter_only_matches_selected_channel() {
    let filter = ChannelFilter::Only(Channel::Online);

    assert!(filter.matches(Channel::Online));
    assert!(!filter.matches(Channel::InStore));
}

#[test]
fn test_channel_filter_parses_blank_and_all_as_unrestricted() -> Result<()> {
    assert_eq!(ChannelFilter::from_str("")?, ChannelFilter::All);
    assert_eq!(ChannelFilter::from_str("ALL")?, ChannelFilter::All);
    assert_eq!(ChannelFilter::from_str("In-store")?, ChannelFilter::Only(Channel::InStore));
    assert!(ChannelFilter::from_str("phone").is_err());

    Ok(())
}
