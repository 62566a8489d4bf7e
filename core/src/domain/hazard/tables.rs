//! Hazard analysis tables (CODEX Alimentarius, FAO/WHO, NACMCF guidance).

use crate::domain::hazard::entities::{
    HazardCategory, HazardSpec,
    Likelihood::{High as LikelyHigh, Low as LikelyLow, Medium as LikelyMedium, VeryLow},
    RiskLevel::{High, Low, Medium},
};

pub type HazardTable = &'static [(HazardCategory, &'static [HazardSpec])];

pub const GENERIC_PLACEHOLDER: &[HazardSpec] = &[HazardSpec::new(
    "일반 위해요소 검토 필요",
    Medium,
    LikelyLow,
    "CODEX 일반원칙(HACCP)에 따른 위해요소 분석 실시",
)];

pub const MICROBIAL: HazardTable = &[
    (
        HazardCategory::Produce,
        &[
            HazardSpec::new(
                "병원성 대장균 (E. coli O157:H7)",
                High,
                LikelyMedium,
                "유효염소 50~200ppm 세척·소독 및 냉장 유통",
            ),
            HazardSpec::new("살모넬라", Medium, LikelyLow, "재배용수 관리 및 교차오염 방지"),
            HazardSpec::new("노로바이러스", Medium, LikelyLow, "작업자 손 세척 및 위생 관리"),
        ],
    ),
    (
        HazardCategory::Livestock,
        &[
            HazardSpec::new("살모넬라", High, LikelyMedium, "중심온도 75℃ 1분 이상 가열"),
            HazardSpec::new(
                "캠필로박터",
                High,
                LikelyMedium,
                "도축·가공 시 교차오염 방지",
            ),
            HazardSpec::new(
                "리스테리아 모노사이토제네스",
                High,
                LikelyLow,
                "5℃ 이하 냉장 보관 및 유통기한 관리",
            ),
        ],
    ),
    (
        HazardCategory::Seafood,
        &[
            HazardSpec::new("장염비브리오", High, LikelyMedium, "5℃ 이하 냉장 및 수돗물 세척"),
            HazardSpec::new("노로바이러스 (패류)", High, LikelyMedium, "중심온도 85℃ 1분 이상 가열"),
            HazardSpec::new(
                "고래회충 (아니사키스)",
                Medium,
                LikelyLow,
                "-20℃ 24시간 이상 냉동 또는 육안 검사",
            ),
        ],
    ),
    (
        HazardCategory::Grain,
        &[
            HazardSpec::new(
                "바실러스 세레우스",
                Medium,
                LikelyMedium,
                "조리 후 신속 냉각 및 실온 방치 금지",
            ),
            HazardSpec::new("저장 곰팡이", Medium, LikelyMedium, "수분 14% 이하로 건조 저장"),
        ],
    ),
    (
        HazardCategory::FoodAdditive,
        &[HazardSpec::new(
            "원료 취급 중 미생물 오염",
            Low,
            VeryLow,
            "GMP 제조시설 관리",
        )],
    ),
    (
        HazardCategory::Spice,
        &[
            HazardSpec::new("살모넬라", High, LikelyMedium, "스팀 살균 등 살균 처리"),
            HazardSpec::new(
                "바실러스 세레우스·클로스트리디움 퍼프린젠스",
                Medium,
                LikelyMedium,
                "건조 상태 보관 및 살균 처리",
            ),
        ],
    ),
    (
        HazardCategory::MedicinalHerb,
        &[
            HazardSpec::new("곰팡이·효모", Medium, LikelyMedium, "건조·저장 습도 관리"),
            HazardSpec::new("대장균군", Medium, LikelyLow, "세척 및 건조 공정 관리"),
        ],
    ),
];

pub const CHEMICAL: HazardTable = &[
    (
        HazardCategory::Produce,
        &[
            HazardSpec::new(
                "잔류농약",
                High,
                LikelyMedium,
                "PLS(농약 허용물질목록 관리제도) 0.01ppm 기준 준수 검사",
            ),
            HazardSpec::new(
                "중금속 (납·카드뮴)",
                Medium,
                LikelyLow,
                "재배 토양·용수 정기 검사",
            ),
        ],
    ),
    (
        HazardCategory::Livestock,
        &[
            HazardSpec::new(
                "동물용의약품 (항생제) 잔류",
                Medium,
                LikelyLow,
                "휴약기간 준수 및 잔류물질 검사",
            ),
            HazardSpec::new(
                "성장호르몬제 잔류",
                Medium,
                VeryLow,
                "수입 축산물 잔류물질 검사",
            ),
        ],
    ),
    (
        HazardCategory::Seafood,
        &[
            HazardSpec::new("히스타민", High, LikelyMedium, "어획 후 신속 냉각 및 온도 관리"),
            HazardSpec::new("메틸수은", Medium, LikelyLow, "대형 어종 중금속 검사"),
            HazardSpec::new(
                "패류독소",
                High,
                LikelyLow,
                "패류독소 기준 초과 해역 채취 금지",
            ),
        ],
    ),
    (
        HazardCategory::Grain,
        &[
            HazardSpec::new(
                "곰팡이독소 (아플라톡신 등)",
                High,
                LikelyLow,
                "입고 시 곰팡이독소 검사",
            ),
            HazardSpec::new(
                "저장 훈증제 잔류",
                Medium,
                LikelyLow,
                "훈증 후 충분한 환기 및 잔류 검사",
            ),
            HazardSpec::new(
                "글루텐 (알레르기 유발물질)",
                Medium,
                LikelyHigh,
                "알레르기 유발물질 표시",
            ),
        ],
    ),
    (
        HazardCategory::FoodAdditive,
        &[
            HazardSpec::new(
                "사용기준 초과 사용",
                High,
                LikelyLow,
                "식품첨가물공전 사용기준 준수",
            ),
            HazardSpec::new(
                "불순물 (중금속 등)",
                Medium,
                LikelyLow,
                "규격 시험성적서 확인",
            ),
            HazardSpec::new(
                "페닐알라닌 (페닐케톤뇨증 환자)",
                Medium,
                LikelyMedium,
                "제품 표시사항 확인",
            ),
        ],
    ),
    (
        HazardCategory::Spice,
        &[
            HazardSpec::new(
                "곰팡이독소 (아플라톡신·오크라톡신)",
                High,
                LikelyMedium,
                "입고 시 곰팡이독소 검사",
            ),
            HazardSpec::new(
                "불법 색소 (수단 색소 등)",
                High,
                LikelyLow,
                "수입 시 정밀 검사",
            ),
        ],
    ),
    (
        HazardCategory::MedicinalHerb,
        &[
            HazardSpec::new(
                "잔류 이산화황",
                Medium,
                LikelyMedium,
                "이산화황 잔류 기준 (30ppm 이하) 검사",
            ),
            HazardSpec::new(
                "중금속 (납·카드뮴·비소)",
                High,
                LikelyLow,
                "한약재 중금속 기준 검사",
            ),
            HazardSpec::new("잔류농약", Medium, LikelyLow, "GAP 인증 원료 사용"),
        ],
    ),
];

pub const PHYSICAL: HazardTable = &[
    (
        HazardCategory::Produce,
        &[
            HazardSpec::new("흙·돌 이물", Low, LikelyMedium, "선별 및 세척 공정"),
            HazardSpec::new("금속 이물", Medium, VeryLow, "금속검출기 운용"),
        ],
    ),
    (
        HazardCategory::Livestock,
        &[
            HazardSpec::new("뼛조각", Medium, LikelyMedium, "발골 후 선별 및 X-ray 검사"),
            HazardSpec::new(
                "주삿바늘 파편",
                High,
                VeryLow,
                "금속검출기 운용 및 사육 기록 관리",
            ),
        ],
    ),
    (
        HazardCategory::Seafood,
        &[
            HazardSpec::new("가시·뼈", Low, LikelyHigh, "필렛 가공 시 가시 제거 및 검품"),
            HazardSpec::new("낚싯바늘 등 금속", Medium, VeryLow, "금속검출기 운용"),
        ],
    ),
    (
        HazardCategory::Grain,
        &[
            HazardSpec::new("돌·금속 이물", Medium, LikelyLow, "석발기 및 자석 선별"),
            HazardSpec::new("저장 해충 (바구미 등)", Low, LikelyMedium, "방충 관리 및 저온 보관"),
        ],
    ),
    (
        HazardCategory::FoodAdditive,
        &[HazardSpec::new("포장재 파편", Low, VeryLow, "원료 입고 검사")],
    ),
    (
        HazardCategory::Spice,
        &[
            HazardSpec::new(
                "돌·흙·금속 이물",
                Medium,
                LikelyMedium,
                "체 선별 및 금속검출기 운용",
            ),
            HazardSpec::new("곤충 이물", Low, LikelyMedium, "방충 관리 및 선별"),
        ],
    ),
    (
        HazardCategory::MedicinalHerb,
        &[HazardSpec::new(
            "흙·돌·벌레 이물",
            Low,
            LikelyMedium,
            "선별·세척 및 이물 검사",
        )],
    ),
];

/// Rows for `category` in `table`, or the generic placeholder when the table has none.
pub fn lookup(table: HazardTable, category: HazardCategory) -> &'static [HazardSpec] {
    table
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, rows)| *rows)
        .unwrap_or(GENERIC_PLACEHOLDER)
}
