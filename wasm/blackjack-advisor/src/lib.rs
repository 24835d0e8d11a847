use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod advice;
pub mod config;
#[cfg(target_arch = "wasm32")]
mod console;
pub mod normalize;
pub mod table;

pub use advice::{Advice, Advisor, ColorTag, HouseRules};
pub use config::{AdvisorConfig, LoggingConfig};
pub use normalize::{normalize_card, normalize_hand, CardKey, HandKey};
pub use table::{LoadError, StrategyRow, StrategyTable};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    #[serde(default)]
    pub player_hand: String,
    #[serde(default)]
    pub dealer_up_card: String,
    #[serde(flatten)]
    pub rules: HouseRules,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub text: String,
    pub color: ColorTag,
    pub css_color: &'static str,
}

impl From<Advice> for AdviceResponse {
    fn from(advice: Advice) -> Self {
        AdviceResponse {
            css_color: advice.color.css_color(),
            text: advice.text,
            color: advice.color,
        }
    }
}

/// Browser-facing advisor holding one loaded strategy table.
#[wasm_bindgen]
pub struct WebAdvisor {
    table: StrategyTable,
}

#[wasm_bindgen]
impl WebAdvisor {
    #[wasm_bindgen(constructor)]
    pub fn new(csv_text: &str, options: &JsValue) -> Result<WebAdvisor, JsValue> {
        console_error_panic_hook::set_once();
        init_logging(options)?;
        let table = StrategyTable::from_csv_str(csv_text)
            .map_err(|err| JsValue::from_str(&format!("Strategy error: {err}")))?;
        log::info!("loaded {} strategy rows", table.len());
        Ok(WebAdvisor { table })
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json_text: &str, options: &JsValue) -> Result<WebAdvisor, JsValue> {
        console_error_panic_hook::set_once();
        init_logging(options)?;
        let table = StrategyTable::from_json_str(json_text)
            .map_err(|err| JsValue::from_str(&format!("Strategy error: {err}")))?;
        log::info!("loaded {} strategy rows", table.len());
        Ok(WebAdvisor { table })
    }

    #[wasm_bindgen(js_name = getAdvice)]
    pub fn get_advice(&self, params: &JsValue) -> Result<JsValue, JsValue> {
        console_error_panic_hook::set_once();
        let request: AdviceRequest = serde_wasm_bindgen::from_value(params.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

        let advice = Advisor::new(&self.table).advise(
            &request.player_hand,
            &request.dealer_up_card,
            &request.rules,
        );

        serde_wasm_bindgen::to_value(&AdviceResponse::from(advice))
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn hands(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.table.hands())
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }
}

/// `options` is `{ logLevel? }`; the table always comes from the caller.
fn init_logging(options: &JsValue) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        LoggingConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<LoggingConfig>(options.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid options: {err}")))?
    };
    #[cfg(target_arch = "wasm32")]
    console::init(config.level_filter());
    #[cfg(not(target_arch = "wasm32"))]
    log::set_max_level(config.level_filter());
    Ok(())
}
