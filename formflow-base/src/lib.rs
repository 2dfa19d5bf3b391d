mod errors;
pub use errors::KeyError;

mod ordered_map;
pub use ordered_map::OrderedMap;
