pub(crate) mod helper_constants;
mod helper_functions;
mod phone_regexps;
mod defaults;
mod phone_number;
pub mod errors;
pub mod enums;
pub mod phoneutil;

use std::sync::LazyLock;

pub use defaults::Defaults;
pub use enums::{NamedFormat, NumberFormatKind};
pub use helper_functions::{extract_extension, normalize};
pub use phone_number::{NumberParts, PhoneNumber};
use crate::{country::Registry, phoneutil::phoneutil::PhoneUtil};

/// Util over the country table bundled with the crate.
///
/// Area codes are searched anywhere in the national number. With the
/// bundled Croatian table `451-588` finds `51` inside the subscriber digits;
/// write the trunk zero and area code (`047 451-588`) to split it reliably.
pub static PHONE_UTIL: LazyLock<PhoneUtil> = LazyLock::new(|| {
    match Registry::bundled() {
        Ok(registry) => PhoneUtil::new(registry),
        Err(err) => {
            let err_message = format!("Could not load bundled country registry: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
});
