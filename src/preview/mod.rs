mod highlight;
mod locate;
mod query;

pub use self::highlight::render;
pub use self::highlight::segments;
pub use self::highlight::Segment;
pub use self::locate::locate;
pub use self::locate::trim_page_text;
pub use self::locate::Preview;
pub use self::query::decode_query_value;
pub use self::query::parse_terms;
pub use self::query::query_from_location;
pub use self::query::query_variable;
pub use self::query::QUERY_VARIABLE;
