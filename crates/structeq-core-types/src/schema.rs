//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Comparison fields
pub const FIELD_KIND: &str = "kind";
pub const FIELD_REASON: &str = "reason";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical operation names
pub const OP_DEEP_EQUAL: &str = "deep_equal";

// Canonical event names
pub const EVENT_MISMATCH: &str = "mismatch";
pub const EVENT_END_ERROR: &str = "end_error";

// Mismatch reasons
pub const REASON_NULLISH: &str = "nullish";
pub const REASON_TYPE_FAMILY: &str = "type_family";
pub const REASON_PRIMITIVE: &str = "primitive";
pub const REASON_LENGTH: &str = "length";
pub const REASON_TIME: &str = "time";
pub const REASON_SOURCE: &str = "source";
pub const REASON_FLAGS: &str = "flags";
pub const REASON_SIZE: &str = "size";
pub const REASON_MISSING_KEY: &str = "missing_key";
pub const REASON_MISSING_ELEMENT: &str = "missing_element";
pub const REASON_KIND: &str = "kind";
