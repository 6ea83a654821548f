use std::sync::Once;

use crate::{PhoneUtil, Registry};

static ONCE: Once = Once::new();

/// Small table with the shapes the parser has to deal with: a plain area
/// code, an alternation, an empty area code and overlapping dialing codes.
pub(crate) const TEST_REGISTRY: &str = r#"
'1':
  country_code: '1'
  name: United States
  char_2_code: US
  char_3_code: USA
  area_code: '[2-9][0-8][0-9]'
  max_num_length: '7'
  national_dialing_prefix: '1'
  international_dialing_prefix: '011'
'1242':
  country_code: '1242'
  name: Bahamas
  char_2_code: BS
  char_3_code: BHS
  area_code: ''
  max_num_length: '7'
'49':
  country_code: '49'
  name: Germany
  char_2_code: DE
  char_3_code: DEU
  area_code: '30|40|89'
  max_num_length: '8'
  national_dialing_prefix: '0'
  international_dialing_prefix: '00'
'385':
  country_code: '385'
  name: Croatia
  char_2_code: HR
  char_3_code: HRV
  area_code: '91'
  max_num_length: '7'
  national_dialing_prefix: '0'
  international_dialing_prefix: '00'
'386':
  country_code: '386'
  name: Slovenia
  char_2_code: SI
  char_3_code: SVN
  area_code: ''
  max_num_length: '7'
  national_dialing_prefix: '0'
  international_dialing_prefix: '00'
"#;

// This setup function simulates getting the PhoneUtil instance for each test.
pub(crate) fn get_phone_util() -> PhoneUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    let registry = Registry::from_yaml_str(TEST_REGISTRY).expect("Test registry should be valid");
    PhoneUtil::new(registry)
}
