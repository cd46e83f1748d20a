/// Path of an extracted file, stored as a UTF-8 string column value.
/// Example: `repo/src/app/main.py`
pub type PathString = String;
/// Zero-based record index assigned in discovery order.
pub type RecordIndex = u64;
