//! End-to-end integration tests for Spell Bot.

mod common;

use common::{test_dispatcher, user_message, BOT_NUMBER, USER_NUMBER};
use signal_client::Attachment;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_spell_lookup_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("GET"))
        .and(path("/spells/fireball"))
        .and(query_param("system", "dnd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Fireball",
            "description": "A bright streak flashes from your pointing finger.",
            "spelldata": {"level": 3, "school": "evocation"},
            "metadata": {"system": "dnd"}
        })))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_json(serde_json::json!({
            "message": "**Fireball**\n\nA bright streak flashes from your pointing finger.\n\n**Level:** 3\n**School:** evocation",
            "number": BOT_NUMBER,
            "recipients": [USER_NUMBER],
            "text_mode": "styled"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?spell fireball system=dnd", vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_spell_lookup_not_found_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("GET"))
        .and(path("/spells/wish"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("Spell not found"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?spell wish", vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_spell_lookup_many_results_styled_table_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    let spells: Vec<_> = ["Light", "Mending", "Message", "Prestidigitation"]
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "description": "",
                "spelldata": {"level": 0},
                "metadata": {"system": "dnd"}
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/spells"))
        .and(query_param("level", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&spells))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_json(serde_json::json!({
            "message": "**Spell Name** | **System**\n`Light | dnd`\n`Mending | dnd`\n`Message | dnd`\n`Prestidigitation | dnd`",
            "number": BOT_NUMBER,
            "recipients": [USER_NUMBER],
            "text_mode": "styled"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?spell level=0", vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_spell_add_inline_yaml_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("POST"))
        .and(path("/spells"))
        .and(body_json(serde_json::json!({
            "name": "Light",
            "description": "An object glows.",
            "metadata": {"system": "dnd"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("Added Light"))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("Added Light"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    let text = "?spell add\nname: Light\ndescription: An object glows.\nmetadata:\n  system: dnd\n";
    dispatcher
        .handle(&user_message(text, vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_spell_add_attachment_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("GET"))
        .and(path("/v1/attachments/fireball.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"name": "Fireball", "description": "Boom"}"#),
        )
        .expect(1)
        .mount(&signal_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/spells"))
        .and(body_json(serde_json::json!({"name": "Fireball", "description": "Boom"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("Added Fireball"))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("Added Fireball"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    let attachment = Attachment {
        id: "fireball.json".into(),
        content_type: Some("application/json".into()),
        filename: Some("fireball.json".into()),
        size: Some(43),
    };
    dispatcher
        .handle(&user_message("?spell add", vec![attachment]), &*signal)
        .await;
}

#[tokio::test]
async fn test_spell_add_empty_reports_error_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("POST"))
        .and(path("/spells"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("Nothing to add"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?spell add", vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_metadata_names_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("GET"))
        .and(path("/spellmetadata"))
        .and(header("X-USER-ID", USER_NUMBER))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["system", "school"])))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_json(serde_json::json!({
            "message": "Found the following possible metadata names:\nsystem\nschool\n",
            "number": BOT_NUMBER,
            "recipients": [USER_NUMBER],
            "text_mode": "normal"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?metadata", vec![]), &*signal)
        .await;
}

#[tokio::test]
async fn test_metadata_values_e2e() {
    let spell_api = MockServer::start().await;
    let signal_server = MockServer::start().await;
    let (dispatcher, signal) = test_dispatcher(&spell_api, &signal_server);

    Mock::given(method("GET"))
        .and(path("/spellmetadata/system"))
        .and(header("X-USER-ID", USER_NUMBER))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "system": ["dnd", "pathfinder"]
        })))
        .expect(1)
        .mount(&spell_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains(
            "Found the following possible metadata values for system:\\ndnd\\npathfinder\\n",
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&signal_server)
        .await;

    dispatcher
        .handle(&user_message("?metadata system", vec![]), &*signal)
        .await;
}
