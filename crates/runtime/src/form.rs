//! Form-URL-encoding of dynamic maps.

use strato_value::Object;
use url::form_urlencoded::Serializer;

/// Render a dynamic map as an `application/x-www-form-urlencoded` body.
///
/// Values render via their default stringification (not JSON). The pair
/// order follows the map's iteration order, which is unspecified; callers
/// must not depend on it. `None` yields an empty string.
pub fn to_form_string(map: Option<&Object>) -> String {
    let Some(map) = map else {
        return String::new();
    };

    let mut encoder = Serializer::new(String::new());
    for (key, value) in map {
        encoder.append_pair(key, &value.to_string());
    }
    encoder.finish()
}
