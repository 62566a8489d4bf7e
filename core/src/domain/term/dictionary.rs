//! Static term tables.
//!
//! `QUERY_TO_ENGLISH` keys are already trimmed and lower-cased.
//! `ENGLISH_TO_KOREAN` is applied in declaration order; do not sort it.

pub const QUERY_TO_ENGLISH: &[(&str, &str)] = &[
    // 농산물
    ("사과", "apple"),
    ("りんご", "apple"),
    ("リンゴ", "apple"),
    ("林檎", "apple"),
    ("배", "pear"),
    ("なし", "pear"),
    ("딸기", "strawberry"),
    ("いちご", "strawberry"),
    ("イチゴ", "strawberry"),
    ("苺", "strawberry"),
    ("포도", "grape"),
    ("ぶどう", "grape"),
    ("ブドウ", "grape"),
    ("토마토", "tomato"),
    ("トマト", "tomato"),
    ("마늘", "garlic"),
    ("にんにく", "garlic"),
    ("ニンニク", "garlic"),
    ("양파", "onion"),
    ("玉ねぎ", "onion"),
    ("たまねぎ", "onion"),
    ("대파", "green onion"),
    ("파", "green onion"),
    ("ねぎ", "green onion"),
    ("양배추", "cabbage"),
    ("キャベツ", "cabbage"),
    ("배추", "napa cabbage"),
    ("白菜", "napa cabbage"),
    ("상추", "lettuce"),
    ("レタス", "lettuce"),
    ("시금치", "spinach"),
    ("ほうれん草", "spinach"),
    ("당근", "carrot"),
    ("にんじん", "carrot"),
    ("감자", "potato"),
    ("じゃがいも", "potato"),
    ("고구마", "sweet potato"),
    ("さつまいも", "sweet potato"),
    ("오이", "cucumber"),
    ("きゅうり", "cucumber"),
    ("애호박", "zucchini"),
    ("가지", "eggplant"),
    ("なす", "eggplant"),
    ("무", "radish"),
    ("大根", "radish"),
    ("파프리카", "bell pepper"),
    ("고추", "chili pepper"),
    ("버섯", "mushroom"),
    ("きのこ", "mushroom"),
    ("표고버섯", "shiitake mushroom"),
    ("しいたけ", "shiitake mushroom"),
    ("바나나", "banana"),
    ("バナナ", "banana"),
    ("오렌지", "orange"),
    ("귤", "tangerine"),
    ("みかん", "tangerine"),
    ("복숭아", "peach"),
    ("もも", "peach"),
    ("수박", "watermelon"),
    ("すいか", "watermelon"),
    ("참외", "melon"),
    ("블루베리", "blueberry"),
    ("감", "persimmon"),
    ("키위", "kiwi"),
    ("레몬", "lemon"),
    ("レモン", "lemon"),
    ("브로콜리", "broccoli"),
    ("호박", "pumpkin"),
    ("かぼちゃ", "pumpkin"),
    ("옥수수", "corn"),
    ("콩나물", "soybean sprouts"),
    ("깻잎", "perilla leaves"),
    ("자두", "plum"),
    // 축산물
    ("소고기", "beef"),
    ("쇠고기", "beef"),
    ("牛肉", "beef"),
    ("돼지고기", "pork"),
    ("豚肉", "pork"),
    ("닭고기", "chicken"),
    ("鶏肉", "chicken"),
    ("오리고기", "duck"),
    ("양고기", "lamb"),
    ("우유", "milk"),
    ("牛乳", "milk"),
    ("계란", "egg"),
    ("달걀", "egg"),
    ("卵", "egg"),
    ("たまご", "egg"),
    ("치즈", "cheese"),
    ("チーズ", "cheese"),
    ("버터", "butter"),
    ("バター", "butter"),
    ("요거트", "yogurt"),
    ("햄", "ham"),
    ("베이컨", "bacon"),
    ("소시지", "sausage"),
    // 수산물
    ("연어", "salmon"),
    ("鮭", "salmon"),
    ("サーモン", "salmon"),
    ("참치", "tuna"),
    ("まぐろ", "tuna"),
    ("マグロ", "tuna"),
    ("고등어", "mackerel"),
    ("さば", "mackerel"),
    ("대구", "cod"),
    ("오징어", "squid"),
    ("いか", "squid"),
    ("문어", "octopus"),
    ("たこ", "octopus"),
    ("새우", "shrimp"),
    ("えび", "shrimp"),
    ("海老", "shrimp"),
    ("게", "crab"),
    ("かに", "crab"),
    ("굴", "oyster"),
    ("牡蠣", "oyster"),
    ("조개", "clam"),
    ("멸치", "anchovy"),
    ("미역", "seaweed"),
    ("わかめ", "seaweed"),
    ("김", "laver"),
    ("海苔", "laver"),
    ("전복", "abalone"),
    ("장어", "eel"),
    ("うなぎ", "eel"),
    // 곡류·가공식품
    ("쌀", "rice"),
    ("米", "rice"),
    ("お米", "rice"),
    ("현미", "brown rice"),
    ("밀가루", "wheat flour"),
    ("小麦粉", "wheat flour"),
    ("강력분", "bread flour"),
    ("強力粉", "bread flour"),
    ("중력분", "all-purpose flour"),
    ("中力粉", "all-purpose flour"),
    ("박력분", "cake flour"),
    ("薄力粉", "cake flour"),
    ("빵", "bread"),
    ("パン", "bread"),
    ("국수", "noodles"),
    ("うどん", "noodles"),
    ("라면", "ramen"),
    ("ラーメン", "ramen"),
    ("보리", "barley"),
    ("귀리", "oats"),
    ("메밀", "buckwheat"),
    ("そば", "buckwheat"),
    ("두부", "tofu"),
    ("豆腐", "tofu"),
    ("콩", "soybean"),
    ("大豆", "soybean"),
    // 식품첨가물
    ("아스파탐", "aspartame"),
    ("アスパルテーム", "aspartame"),
    ("사카린", "saccharin"),
    ("サッカリン", "saccharin"),
    ("식품첨가물", "food additives"),
    ("食品添加物", "food additives"),
    ("글루탐산나트륨", "monosodium glutamate"),
    ("msg", "monosodium glutamate"),
    ("수크랄로스", "sucralose"),
    ("안식향산나트륨", "sodium benzoate"),
    ("아질산나트륨", "sodium nitrite"),
    ("소르빈산칼륨", "potassium sorbate"),
    ("스테비아", "stevia"),
    ("구연산", "citric acid"),
    ("자일리톨", "xylitol"),
    // 향신료
    ("후추", "pepper"),
    ("こしょう", "pepper"),
    ("コショウ", "pepper"),
    ("胡椒", "pepper"),
    ("바질", "basil"),
    ("バジル", "basil"),
    ("시나몬", "cinnamon"),
    ("계피", "cinnamon"),
    ("シナモン", "cinnamon"),
    ("향신료", "spices"),
    ("香辛料", "spices"),
    ("スパイス", "spices"),
    ("생강", "ginger"),
    ("しょうが", "ginger"),
    ("生姜", "ginger"),
    ("강황", "turmeric"),
    ("육두구", "nutmeg"),
    ("정향", "clove"),
    ("오레가노", "oregano"),
    ("로즈마리", "rosemary"),
    ("타임", "thyme"),
    ("겨자", "mustard"),
    ("고춧가루", "chili powder"),
    ("와사비", "wasabi"),
    ("わさび", "wasabi"),
    // 한약재
    ("인삼", "ginseng"),
    ("朝鮮人参", "ginseng"),
    ("高麗人参", "ginseng"),
    ("홍삼", "red ginseng"),
    ("감초", "licorice root"),
    ("甘草", "licorice root"),
    ("대추", "jujube"),
    ("なつめ", "jujube"),
    ("당귀", "angelica root"),
    ("황기", "astragalus root"),
    ("오미자", "schisandra berry"),
    ("구기자", "goji berry"),
    ("천궁", "cnidium rhizome"),
    ("지황", "rehmannia root"),
    ("도라지", "platycodon root"),
    ("한약재", "medicinal herbs"),
    ("漢方", "medicinal herbs"),
    ("生薬", "medicinal herbs"),
];

/// English → Korean display terms. Replacements run top to bottom, so a key that
/// is a substring of a later key (`Pork` / `Pork Products`, `Enriched` /
/// `Unenriched`) rewrites part of it first. The order is part of the output contract.
pub const ENGLISH_TO_KOREAN: &[(&str, &str)] = &[
    ("Protein", "단백질"),
    ("Total lipid (fat)", "지방"),
    ("Carbohydrate, by difference", "탄수화물"),
    ("Energy", "열량(에너지)"),
    ("Sugars, total including NLEA", "당류"),
    ("Sodium, Na", "나트륨"),
    ("Cholesterol", "콜레스테롤"),
    ("Fatty acids, total saturated", "포화지방"),
    ("Fatty acids, total trans", "트랜스지방"),
    ("Apple", "사과"),
    ("Beef", "소고기"),
    ("Fruits and Fruit Juices", "과일 및 과일주스류"),
    ("Beef Products", "소고기 가공품"),
    ("Pork", "돼지고기"),
    ("Pork Products", "돼지고기 가공품"),
    ("Strawberry", "딸기"),
    ("Strawberries", "딸기"),
    ("Chicken", "닭고기"),
    ("Poultry Products", "가금류 가공품"),
    ("Pepper", "후추"),
    ("Basil", "바질"),
    ("Cinnamon", "시나몬(계피)"),
    ("Spices and Herbs", "향신료 및 허브"),
    ("Aspartame", "아스파탐"),
    ("Saccharin", "사카린"),
    ("raw", "생물(Raw)"),
    ("Meat", "육류"),
    ("Wheat flour", "밀가루"),
    ("White, all-purpose", "다목적(중력분) 백밀가루"),
    ("Bread", "제빵용(강력분)"),
    ("Cake", "제과용(박력분)"),
    ("Enriched", "영양 강화"),
    ("Unenriched", "영양 무강화"),
    ("Bleached", "표백"),
    ("Unbleached", "무표백"),
    ("Fruits", "과일류"),
    ("General", "일반"),
    ("Food Additives", "식품첨가물"),
    ("Vegetables and Vegetable Products", "채소 및 채소 가공품"),
    ("Finfish and Shellfish Products", "어패류 가공품"),
    ("Dairy and Egg Products", "유제품 및 난류"),
    ("Cereal Grains and Pasta", "곡류 및 파스타"),
    ("Legumes and Legume Products", "콩류 및 콩 가공품"),
    ("Nut and Seed Products", "견과 및 종자류"),
    ("Baked Products", "제과·제빵 제품"),
];
