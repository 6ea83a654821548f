mod country_record;
mod errors;
mod registry;

pub use country_record::{CountryFormats, CountryRecord};
pub use errors::RegistryError;
pub use registry::Registry;
