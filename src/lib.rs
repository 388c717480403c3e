pub mod date;
pub mod deprecate;
pub mod escape;
pub mod exception;
pub mod param;
pub mod query;

pub use date::{dt_to_http, http_date_to_dt, http_now};
pub use deprecate::{deprecated, Deprecated, DeprecationMarker};
pub use escape::{percent_escape, percent_unescape};
pub use exception::Exception;
pub use query::{parse_query_str, to_query_str, QueryValue};
