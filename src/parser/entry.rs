//! Key-value entry parsing

/// Split a trimmed line into key and value on the first `=`
///
/// Both sides are trimmed, so `"  k  =  v  "` and `"k=v"` are
/// equivalent. Later `=` characters belong to the value. Returns `None`
/// when the line contains no `=` at all.
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
