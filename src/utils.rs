/// Current UTC time formatted as the protocol timestamp; YYYY-MM-DDTHH:mm:ss.ssZ.
pub fn get_timestamp() -> String {
    let now = chrono::Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
