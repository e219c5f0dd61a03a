use crate::address::{Address, AddressFormat};
use crate::convert::{convert_address, display_address, to_cash_address, to_legacy_address};
use crate::error::{AddressError, EXPECTED_STRING};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn to_js_error(e: AddressError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Strings only; anything else coming from JS is an invalid address.
fn address_string(address: &JsValue) -> Result<String, JsValue> {
    address
        .as_string()
        .ok_or_else(|| to_js_error(AddressError::new(EXPECTED_STRING)))
}

fn set_property(obj: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value).map(|_| ())
}

fn address_to_js_value(address: &Address) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    set_property(&obj, "version", &JsValue::from_str(address.version().as_str()))?;
    set_property(&obj, "prefix", &JsValue::from_str(address.prefix()))?;
    set_property(&obj, "network", &JsValue::from_str(address.network().as_str()))?;
    set_property(&obj, "payload", &JsValue::from_str(&hex::encode(address.payload())))?;
    let digest = match address.digest() {
        Some(digest) => JsValue::from_str(&hex::encode(digest)),
        None => JsValue::NULL,
    };
    set_property(&obj, "digest", &digest)?;
    Ok(obj.into())
}

#[wasm_bindgen]
pub struct CashAddrNamespace;

#[wasm_bindgen]
impl CashAddrNamespace {
    #[wasm_bindgen]
    pub fn to_cash_address(address: JsValue) -> Result<String, JsValue> {
        to_cash_address(&address_string(&address)?).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn to_legacy_address(address: JsValue) -> Result<String, JsValue> {
        to_legacy_address(&address_string(&address)?).map_err(to_js_error)
    }

    /// Never throws: non-string input is simply not a valid address.
    #[wasm_bindgen]
    pub fn is_valid(address: JsValue) -> bool {
        address
            .as_string()
            .is_some_and(|address| crate::convert::is_valid(&address))
    }

    #[wasm_bindgen]
    pub fn display_address(address: JsValue) -> Result<String, JsValue> {
        display_address(&address_string(&address)?).map_err(to_js_error)
    }

    /// Convert an address to the given format
    ///
    /// # Arguments
    /// * `address` - A legacy or cashaddr address string
    /// * `format` - Optional output format: "cashaddr" (default) or "legacy"
    #[wasm_bindgen]
    pub fn convert(address: JsValue, format: Option<String>) -> Result<String, JsValue> {
        let address = address_string(&address)?;
        let format = AddressFormat::from_optional_str(format.as_deref()).map_err(to_js_error)?;
        convert_address(&address, format).map_err(to_js_error)
    }

    /// Decode an address into `{ version, prefix, network, payload, digest }`
    #[wasm_bindgen]
    pub fn decode(address: JsValue) -> Result<JsValue, JsValue> {
        let address = Address::parse(&address_string(&address)?).map_err(to_js_error)?;
        address_to_js_value(&address)
    }
}
