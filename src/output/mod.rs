mod header;
mod listing;

pub use header::{Header, format_file_list, format_header};
pub use listing::{
    NO_REQUIRED_VARIABLES, NO_VARIABLES, format_listing, format_listing_json,
    format_required_listing,
};
