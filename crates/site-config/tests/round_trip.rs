use serde_json::json;

use site_config::model::{Align, RiskTier};
use site_config::{ConfigStore, Resource};

fn strategies_payload() -> serde_json::Value {
    json!({
        "low": {
            "name": { "it": "Prudente", "en": "Prudent" },
            "tagline": { "it": "Crescita stabile", "en": "Steady growth" },
            "riskLabel": { "it": "Rischio basso", "en": "Low risk" },
            "return": "8-12%",
            "drawdown": "5%",
            "description": { "it": "<p>Uno</p>", "en": "<p>One</p>" },
            "titleStyle": { "fontSize": "40", "bold": true, "italic": false, "underline": true,
                            "align": "right", "marginBottom": "12" },
            "attachments": {
                "enabled": true,
                "title": { "it": "Documenti", "en": "Documents" },
                "titleStyle": { "fontSize": "20px", "bold": false, "italic": true, "underline": false,
                                "align": "center", "marginBottom": "10px" },
                "files": [{
                    "id": 2, "enabled": false,
                    "title": { "it": "Scheda", "en": "Factsheet" },
                    "description": { "it": "d", "en": "d" },
                    "descriptionStyle": { "fontSize": "13px", "bold": true, "italic": false, "underline": false },
                    "icon": "file-pdf", "filePath": "uploads/strategies/a.pdf", "fileType": "pdf"
                }]
            },
            "customBadge": "new"
        }
    })
}

#[test]
fn test_strategy_survives_save_and_reload() {
    let mut store = ConfigStore::default();
    store.apply(Resource::Strategies, strategies_payload()).unwrap();
    let body = store.payload(Resource::Strategies).unwrap().unwrap();

    let mut reloaded = ConfigStore::default();
    reloaded.apply(Resource::Strategies, body.clone()).unwrap();
    assert_eq!(reloaded.strategies, store.strategies);
    assert_eq!(body, strategies_payload());

    let low = &reloaded.strategies.unwrap()[&RiskTier::Low];
    assert_eq!(low.expected_return, "8-12%");
    assert_eq!(low.title_style.align, Some(Align::Right));
    assert_eq!(low.extra["customBadge"], "new");
}
