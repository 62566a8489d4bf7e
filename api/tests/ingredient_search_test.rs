mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use test_context::{AsyncTestContext, test_context};

use common::test_server;

const SEARCH_PATH: &str = "/api/v1/ingredients/search";

struct SearchContext {
    server: TestServer,
}

impl AsyncTestContext for SearchContext {
    async fn setup() -> Self {
        Self {
            server: test_server(""),
        }
    }
}

async fn search(server: &TestServer, query: &str) -> Value {
    let response = server
        .get(SEARCH_PATH)
        .add_query_param("query", query)
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[test_context(SearchContext)]
#[tokio::test]
async fn korean_apple_falls_back_to_known_table(ctx: &mut SearchContext) {
    let body = search(&ctx.server, "사과").await;

    assert!(body.is_object(), "expected a bare object, got {body}");
    assert_eq!(body["name"], "사과");
    assert_eq!(body["fdcId"], 171688);
    assert!(body["description"].as_str().unwrap().contains("사과"));
    assert_eq!(body["handling"].as_array().unwrap().len(), 9);
    assert_eq!(body["chartData"].as_array().unwrap().len(), 9);
    assert_eq!(body["hazards"]["category"], "농산물");
    assert_eq!(
        body["hazards"]["sources"],
        serde_json::json!(["CODEX Alimentarius", "FAO/WHO", "NACMCF"])
    );
    assert_eq!(
        body["compliance"]["MFDS"],
        "MFDS API 서버 연동 완료. [사과] PLS 검토 대상."
    );
    assert_eq!(
        body["compliance"]["USDA"],
        "[분류: 과일류] 규격 확인 및 성분 검사 완료."
    );
    assert!(
        body["compliance"]["MHLW"]
            .as_str()
            .unwrap()
            .starts_with("MHLW 포지티브 리스트(Positive List) 검토: [사과]")
    );
}

#[test_context(SearchContext)]
#[tokio::test]
async fn blank_query_is_a_bad_request(ctx: &mut SearchContext) {
    for query in ["", "   "] {
        let response = ctx
            .server
            .get(SEARCH_PATH)
            .add_query_param("query", query)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            serde_json::json!({"error": "검색어를 입력해주세요."})
        );
    }

    let missing = ctx.server.get(SEARCH_PATH).await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["error"], "검색어를 입력해주세요.");
}

#[test_context(SearchContext)]
#[tokio::test]
async fn unknown_query_is_simulated(ctx: &mut SearchContext) {
    let body = search(&ctx.server, "unknownxyz").await;

    assert_eq!(body["name"], "UNKNOWNXYZ");
    assert_eq!(body["fdcId"], 999999);
    assert_eq!(body["description"], "Unknownxyz (Simulated Data)");
    assert_eq!(body["hazards"]["category"], "농산물");

    let chart = body["chartData"].as_array().unwrap();
    assert_eq!(chart.len(), 9);
    let protein = chart[0]["value"].as_f64().unwrap();
    assert!((0.5..=20.0).contains(&protein), "protein {protein}");
    let trans_fat = chart[8]["value"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&trans_fat), "trans fat {trans_fat}");
}

#[test_context(SearchContext)]
#[tokio::test]
async fn additive_query_uses_additive_hazards(ctx: &mut SearchContext) {
    let body = search(&ctx.server, "아스파탐").await;

    assert_eq!(body["fdcId"], 999123);
    assert_eq!(body["hazards"]["category"], "식품첨가물");
    assert!(!body["hazards"]["chemical"].as_array().unwrap().is_empty());
}
