//! Display helper functions for objects

/// Label of the object at `index` in lists ("Object 1", "Object 2", ...)
pub fn object_display_name(index: usize) -> String {
    format!("Object {}", index + 1)
}
