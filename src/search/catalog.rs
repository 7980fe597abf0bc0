// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in activity category dictionary.
//!
//! Each entry lists the enum-style labels clients store in the `category`
//! field, followed by natural-language keywords in the languages our users
//! write in. Order matters: on collisions the earlier entry keeps the term.

/// One canonical category and its surface forms.
pub struct CatalogEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        code: "1",
        label: "Hiking",
        aliases: &["HIKING", "HIKE", "RANDO", "RANDONNEE"],
        keywords: &[
            "hike",
            "hiking",
            "trek",
            "trekking",
            "rando",
            "randonnée",
            "senderismo",
            "excursionismo",
            "escursionismo",
            "escursione",
            "wanderung",
            "wandern",
            "caminhada",
            "trilha",
            "wandelen",
            "vandring",
            "fotturer",
            "wędrówka",
            "turistika",
            "yürüyüş",
            "doğa yürüyüşü",
            "поход",
            "туризм",
            "徒步",
            "远足",
            "ハイキング",
            "하이킹",
            "등산로",
        ],
    },
    CatalogEntry {
        code: "2",
        label: "Running",
        aliases: &["RUNNING", "RUN", "TRAIL_RUN", "TRAIL"],
        keywords: &[
            "run",
            "running",
            "jogging",
            "trail running",
            "course",
            "course à pied",
            "footing",
            "correr",
            "carrera",
            "corsa",
            "laufen",
            "dauerlauf",
            "corrida",
            "hardlopen",
            "löpning",
            "bieganie",
            "koşu",
            "бег",
            "跑步",
            "慢跑",
            "ランニング",
            "ジョギング",
            "달리기",
            "러닝",
        ],
    },
    CatalogEntry {
        code: "3",
        label: "Walking",
        aliases: &["WALKING", "WALK"],
        keywords: &[
            "walk",
            "walking",
            "stroll",
            "balade",
            "promenade",
            "marche",
            "paseo",
            "caminar",
            "passeggiata",
            "spaziergang",
            "spazieren",
            "passeio",
            "wandeling",
            "promenad",
            "spacer",
            "gezinti",
            "прогулка",
            "散步",
            "ウォーキング",
            "散歩",
            "산책",
            "걷기",
        ],
    },
    CatalogEntry {
        code: "4",
        label: "Biking",
        aliases: &["BIKING", "BIKE", "RIDE", "CYCLING", "MTB"],
        keywords: &[
            "bike",
            "biking",
            "cycling",
            "ride",
            "mountain bike",
            "vélo",
            "vtt",
            "cyclisme",
            "bicicleta",
            "ciclismo",
            "bici",
            "radfahren",
            "fahrrad",
            "radtour",
            "fietsen",
            "cykling",
            "rower",
            "bisiklet",
            "велосипед",
            "骑行",
            "自行车",
            "サイクリング",
            "自転車",
            "자전거",
        ],
    },
    CatalogEntry {
        code: "5",
        label: "Skiing",
        aliases: &["SKIING", "SKI", "BACKCOUNTRY_SKI", "NORDIC_SKI"],
        keywords: &[
            "ski",
            "skiing",
            "ski de fond",
            "ski de randonnée",
            "esquí",
            "esqui",
            "sci",
            "sci alpinismo",
            "skifahren",
            "skitour",
            "langlauf",
            "skiën",
            "skidåkning",
            "narciarstwo",
            "лыжи",
            "滑雪",
            "スキー",
            "스키",
        ],
    },
    CatalogEntry {
        code: "6",
        label: "Photos",
        aliases: &["PHOTOS", "PHOTO", "PICTURES"],
        keywords: &[
            "photo",
            "photos",
            "picture",
            "photography",
            "photographie",
            "foto",
            "fotos",
            "fotografía",
            "fotografia",
            "fotografie",
            "bild",
            "fotografering",
            "zdjęcie",
            "fotoğraf",
            "фото",
            "фотография",
            "照片",
            "摄影",
            "写真",
            "사진",
        ],
    },
    CatalogEntry {
        code: "7",
        label: "Swimming",
        aliases: &["SWIMMING", "SWIM"],
        keywords: &[
            "swim",
            "swimming",
            "natation",
            "baignade",
            "natación",
            "nadar",
            "nuoto",
            "schwimmen",
            "natação",
            "zwemmen",
            "simning",
            "pływanie",
            "yüzme",
            "плавание",
            "游泳",
            "水泳",
            "수영",
        ],
    },
    CatalogEntry {
        code: "8",
        label: "Climbing",
        aliases: &["CLIMBING", "CLIMB", "BOULDER"],
        keywords: &[
            "climb",
            "climbing",
            "bouldering",
            "escalade",
            "via ferrata",
            "escalada",
            "arrampicata",
            "klettern",
            "bouldern",
            "klimmen",
            "klättring",
            "wspinaczka",
            "tırmanış",
            "скалолазание",
            "攀岩",
            "クライミング",
            "클라이밍",
            "암벽등반",
        ],
    },
    CatalogEntry {
        code: "9",
        label: "Paddling",
        aliases: &["PADDLING", "PADDLE", "KAYAK", "CANOE", "SUP"],
        keywords: &[
            "paddle",
            "paddling",
            "kayak",
            "kayaking",
            "canoe",
            "canoë",
            "piragüismo",
            "canoa",
            "kajak",
            "kanu",
            "paddeln",
            "caiaque",
            "kanoën",
            "kanotpaddling",
            "kajakarstwo",
            "байдарка",
            "皮划艇",
            "カヤック",
            "카약",
        ],
    },
    CatalogEntry {
        code: "10",
        label: "Snowshoeing",
        aliases: &["SNOWSHOEING", "SNOWSHOE"],
        keywords: &[
            "snowshoe",
            "snowshoeing",
            "raquettes",
            "raquette à neige",
            "raquetas de nieve",
            "ciaspole",
            "ciaspolata",
            "schneeschuh",
            "schneeschuhwandern",
            "raquetes de neve",
            "sneeuwschoenwandelen",
            "snöskor",
            "rakiety śnieżne",
            "kar ayakkabısı",
            "снегоступы",
            "雪鞋",
            "スノーシュー",
            "스노슈",
        ],
    },
    CatalogEntry {
        code: "11",
        label: "Mountaineering",
        aliases: &["MOUNTAINEERING", "ALPINISM", "ALPINE"],
        keywords: &[
            "mountaineering",
            "alpinism",
            "alpinisme",
            "alpinismo",
            "montañismo",
            "andinismo",
            "bergsteigen",
            "hochtour",
            "montanhismo",
            "bergbeklimmen",
            "bergsbestigning",
            "taternictwo",
            "dağcılık",
            "альпинизм",
            "登山",
            "登山運動",
            "등산",
        ],
    },
    CatalogEntry {
        code: "12",
        label: "Other",
        aliases: &["OTHER", "MISC"],
        keywords: &[
            "other",
            "autre",
            "otro",
            "altro",
            "sonstiges",
            "outro",
            "overig",
            "övrigt",
            "inne",
            "diğer",
            "другое",
            "其他",
            "その他",
            "기타",
        ],
    },
];
