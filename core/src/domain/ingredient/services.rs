use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    hazard::classifier::{classify, hazard_report},
    ingredient::{
        entities::{
            ChartPoint, Compliance, MISSING_NUTRIENTS, NormalizedResult, ORIGIN_BANNER,
            SearchOutcome,
        },
        ports::IngredientService,
        value_objects::{SearchContext, SearchIngredientInput},
    },
    nutrition::{
        entities::{Nutrient, ProviderNutritionRecord},
        ports::NutritionProvider,
        value_objects::{MAX_NUTRIENTS, NutritionLookup, PRIMARY_PAGE_SIZE},
    },
    regulation::ports::RegulatoryProvider,
    term::{OriginHint, to_canonical, to_localized},
};

impl<N, K, J> IngredientService for Service<N, K, J>
where
    N: NutritionProvider,
    K: RegulatoryProvider,
    J: RegulatoryProvider,
{
    #[instrument(skip(self, input), fields(query = %input.query))]
    async fn search_ingredient(
        &self,
        input: SearchIngredientInput,
    ) -> Result<SearchOutcome, CoreError> {
        let raw_query = input.query.trim();
        if raw_query.is_empty() {
            return Err(CoreError::Invalid);
        }

        let canonical = to_canonical(raw_query);
        debug!(canonical = %canonical, "resolved canonical term");

        let (answer, domestic, foreign) = tokio::join!(
            self.nutrition_provider
                .search_foods(canonical.clone(), PRIMARY_PAGE_SIZE),
            self.domestic_regulation.review(raw_query.to_string()),
            self.foreign_regulation.review(raw_query.to_string()),
        );

        let context = SearchContext {
            raw_query,
            canonical: &canonical,
            domestic: &domestic,
            foreign: &foreign,
        };

        let results = match NutritionLookup::resolve(&canonical, answer) {
            NutritionLookup::Live(records) => records
                .iter()
                .map(|record| normalize(&context, record, record.food_category.as_deref()))
                .collect(),
            NutritionLookup::Fallback(record) => vec![normalize(&context, &record, None)],
        };

        Ok(SearchOutcome::from_results(results))
    }
}

/// Build the dashboard view of one nutrition record.
///
/// `provider_category` feeds the hazard classifier and is `None` for
/// fallback records.
pub fn normalize(
    context: &SearchContext<'_>,
    record: &ProviderNutritionRecord,
    provider_category: Option<&str>,
) -> NormalizedResult {
    let description = to_localized(&record.description, OriginHint::English);
    let category = to_localized(
        record.food_category.as_deref().unwrap_or_default(),
        OriginHint::English,
    );

    let nutrients: Vec<(String, &Nutrient)> = record
        .nutrients
        .iter()
        .take(MAX_NUTRIENTS)
        .map(|nutrient| (to_localized(&nutrient.name, OriginHint::English), nutrient))
        .collect();

    let mut handling: Vec<String> = nutrients
        .iter()
        .map(|(label, nutrient)| {
            format!("{label}: {} {}", format_amount(nutrient.value), nutrient.unit)
        })
        .collect();
    if handling.is_empty() {
        handling.push(MISSING_NUTRIENTS.to_string());
    }

    let chart_data = nutrients
        .into_iter()
        .map(|(label, nutrient)| ChartPoint {
            label,
            value: nutrient.value,
        })
        .collect();

    let hazard_category = classify(context.canonical, provider_category, Some(context.raw_query));

    NormalizedResult {
        name: context.raw_query.to_uppercase(),
        insight: format!(
            "해당 식재료({description})는 측정된 영양성분이 존재합니다. 미국 USDA FDC ID: {}.",
            record.fdc_id
        ),
        description,
        fdc_id: record.fdc_id,
        origin: ORIGIN_BANNER.to_string(),
        compliance: Compliance {
            mfds: context.domestic.text.clone(),
            usda: format!("[분류: {category}] 규격 확인 및 성분 검사 완료."),
            mhlw: to_localized(&context.foreign.text, context.foreign.authority.origin()),
        },
        handling,
        chart_data,
        hazards: hazard_report(hazard_category),
    }
}

/// Render an amount in plain decimal notation with at least one decimal place
/// (`52` becomes `52.0`, `0.00001` stays `0.00001`).
fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::{
        hazard::entities::HazardCategory,
        nutrition::{entities::FdcId, fallback::SIMULATED_FDC_ID, ports::MockNutritionProvider},
        regulation::{
            entities::{RegulatoryAuthority, RegulatoryNotice},
            ports::MockRegulatoryProvider,
        },
    };

    struct FakeNutrition {
        answer: Result<Vec<ProviderNutritionRecord>, CoreError>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeNutrition {
        fn answering(answer: Result<Vec<ProviderNutritionRecord>, CoreError>) -> Self {
            Self {
                answer,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl NutritionProvider for FakeNutrition {
        async fn search_foods(
            &self,
            _query: String,
            _page_size: u32,
        ) -> Result<Vec<ProviderNutritionRecord>, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    struct FakeRegulator {
        authority: RegulatoryAuthority,
        calls: Arc<AtomicUsize>,
    }

    impl FakeRegulator {
        fn new(authority: RegulatoryAuthority) -> Self {
            Self {
                authority,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl RegulatoryProvider for FakeRegulator {
        async fn review(&self, query: String) -> RegulatoryNotice {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RegulatoryNotice {
                authority: self.authority,
                text: format!("review of {query}"),
            }
        }
    }

    fn service(
        nutrition: FakeNutrition,
    ) -> Service<FakeNutrition, FakeRegulator, FakeRegulator> {
        Service::new(
            nutrition,
            FakeRegulator::new(RegulatoryAuthority::Mfds),
            FakeRegulator::new(RegulatoryAuthority::Mhlw),
        )
    }

    fn search(query: &str) -> SearchIngredientInput {
        SearchIngredientInput {
            query: query.to_string(),
        }
    }

    fn live_record(id: u64, description: &str, category: Option<&str>) -> ProviderNutritionRecord {
        ProviderNutritionRecord {
            fdc_id: FdcId::Known(id),
            description: description.to_string(),
            food_category: category.map(str::to_string),
            nutrients: (0..12)
                .map(|i| Nutrient::new("Protein", f64::from(i), "g"))
                .collect(),
        }
    }

    fn unreachable() -> Result<Vec<ProviderNutritionRecord>, CoreError> {
        Err(CoreError::ExternalServiceError(
            "connection refused".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_before_any_provider_call() {
        let nutrition = FakeNutrition::answering(Ok(Vec::new()));
        let calls = Arc::clone(&nutrition.calls);
        let service = service(nutrition);
        let domestic_calls = Arc::clone(&service.domestic_regulation.calls);

        for query in ["", "   ", "\t\n"] {
            let result = service.search_ingredient(search(query)).await;
            assert_eq!(result, Err(CoreError::Invalid));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(domestic_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_korean_query_falls_back_to_apple_table() {
        let service = service(FakeNutrition::answering(unreachable()));

        let outcome = service.search_ingredient(search("사과")).await.unwrap();
        let SearchOutcome::Single(result) = outcome else {
            panic!("expected a single result");
        };

        assert_eq!(result.name, "사과");
        assert_eq!(result.fdc_id, FdcId::Known(171688));
        assert!(result.description.contains("사과"), "{}", result.description);
        assert_eq!(result.handling.len(), 9);
        assert_eq!(result.handling[3], "열량(에너지): 52.0 kcal");
        assert_eq!(result.chart_data.len(), 9);
        assert_eq!(result.chart_data[0].label, "단백질");
        assert_eq!(result.hazards.category, HazardCategory::Produce);
        assert_eq!(result.compliance.usda, "[분류: 과일류] 규격 확인 및 성분 검사 완료.");
        assert_eq!(result.origin, ORIGIN_BANNER);
    }

    #[tokio::test]
    async fn test_providers_receive_canonical_and_raw_queries() {
        let mut nutrition = MockNutritionProvider::new();
        nutrition
            .expect_search_foods()
            .withf(|query, page_size| query == "beef" && *page_size == PRIMARY_PAGE_SIZE)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        let mut domestic = MockRegulatoryProvider::new();
        domestic
            .expect_review()
            .withf(|query| query == "소고기")
            .times(1)
            .returning(|query| {
                Box::pin(async move {
                    RegulatoryNotice {
                        authority: RegulatoryAuthority::Mfds,
                        text: format!("[{query}]"),
                    }
                })
            });

        let mut foreign = MockRegulatoryProvider::new();
        foreign.expect_review().times(1).returning(|query| {
            Box::pin(async move {
                RegulatoryNotice {
                    authority: RegulatoryAuthority::Mhlw,
                    text: format!("[{query}]"),
                }
            })
        });

        let service = Service::new(nutrition, domestic, foreign);
        let outcome = service
            .search_ingredient(search(" 소고기 "))
            .await
            .unwrap();

        let SearchOutcome::Single(result) = outcome else {
            panic!("expected a single result");
        };
        assert_eq!(result.fdc_id, FdcId::Known(170567));
        assert_eq!(result.compliance.mfds, "[소고기]");
        assert_eq!(result.hazards.category, HazardCategory::Livestock);
    }

    #[tokio::test]
    async fn test_unknown_query_is_simulated() {
        let service = service(FakeNutrition::answering(Ok(Vec::new())));

        let outcome = service.search_ingredient(search("unknownxyz")).await.unwrap();
        let SearchOutcome::Single(result) = outcome else {
            panic!("expected a single result");
        };

        assert_eq!(result.name, "UNKNOWNXYZ");
        assert_eq!(result.fdc_id, FdcId::Known(SIMULATED_FDC_ID));
        assert_eq!(result.description, "Unknownxyz (Simulated Data)");
        assert_eq!(result.handling.len(), 9);
        assert_eq!(result.hazards.category, HazardCategory::Produce);
    }

    #[tokio::test]
    async fn test_several_records_are_classified_independently() {
        let records = vec![
            live_record(1, "Salmon, Atlantic, raw", Some("Finfish and Shellfish Products")),
            live_record(2, "Beef, ground", Some("Beef Products")),
            live_record(3, "Bread, wheat", Some("Baked Products")),
        ];
        let service = service(FakeNutrition::answering(Ok(records)));

        let outcome = service.search_ingredient(search("mystery mix")).await.unwrap();
        let SearchOutcome::Multiple(results) = outcome else {
            panic!("expected an array of results");
        };

        let categories: Vec<_> = results.iter().map(|r| r.hazards.category).collect();
        assert_eq!(
            categories,
            vec![
                HazardCategory::Seafood,
                HazardCategory::Livestock,
                HazardCategory::Grain
            ]
        );
        for result in &results {
            assert_eq!(result.handling.len(), MAX_NUTRIENTS);
            assert_eq!(result.chart_data.len(), MAX_NUTRIENTS);
        }
    }

    #[tokio::test]
    async fn test_single_live_record_is_a_bare_object() {
        let records = vec![live_record(7, "Kimchi", Some("Vegetables and Vegetable Products"))];
        let service = service(FakeNutrition::answering(Ok(records)));

        let outcome = service.search_ingredient(search("kimchi")).await.unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert!(json.is_object());
        assert_eq!(json["fdcId"], 7);
        assert_eq!(json["name"], "KIMCHI");
        assert_eq!(json["compliance"]["MFDS"], "review of kimchi");
        assert!(
            json["compliance"]["MHLW"]
                .as_str()
                .unwrap()
                .ends_with("통역되었습니다.)")
        );
        assert!(json["chartData"].is_array());
        assert_eq!(json["hazards"]["category"], "농산물");
    }

    #[test]
    fn test_record_without_nutrients_or_id() {
        let domestic = RegulatoryNotice {
            authority: RegulatoryAuthority::Mfds,
            text: "ok".to_string(),
        };
        let foreign = RegulatoryNotice {
            authority: RegulatoryAuthority::Mhlw,
            text: "ok".to_string(),
        };
        let context = SearchContext {
            raw_query: "Kimchi",
            canonical: "kimchi",
            domestic: &domestic,
            foreign: &foreign,
        };
        let record = ProviderNutritionRecord {
            fdc_id: FdcId::Unavailable,
            description: "Kimchi".to_string(),
            food_category: None,
            nutrients: Vec::new(),
        };

        let result = normalize(&context, &record, None);

        assert_eq!(result.name, "KIMCHI");
        assert_eq!(result.handling, vec![MISSING_NUTRIENTS.to_string()]);
        assert!(result.chart_data.is_empty());
        assert!(result.insight.ends_with("FDC ID: N/A."));
        assert_eq!(result.compliance.usda, "[분류: ] 규격 확인 및 성분 검사 완료.");
    }

    #[test]
    fn test_outcome_shape_follows_result_count() {
        assert_eq!(
            SearchOutcome::from_results(Vec::new()),
            SearchOutcome::Multiple(Vec::new())
        );
    }

    #[test]
    fn test_format_amount_keeps_one_decimal() {
        assert_eq!(format_amount(52.0), "52.0");
        assert_eq!(format_amount(0.26), "0.26");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(0.00001), "0.00001");
        assert_eq!(format_amount(1e20), "100000000000000000000.0");
        assert_eq!(format_amount(-3.0), "-3.0");
    }
}
