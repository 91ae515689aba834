/// Parse a comma-separated event list.
///
/// Entries are trimmed and empty entries are dropped; order is kept.
pub fn parse_event_list(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|event| !event.is_empty()).map(String::from).collect()
}
