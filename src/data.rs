//! Builtin catalog: the five quiz questions, the 21 candidate facilities,
//! and the tag-to-candidate mapping.

use crate::types::catalog::{Candidate, CandidateId, Catalog, Question, SelectionMode};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_THRESHOLD: u32 = 3;

const QUESTIONS: &[(u32, &str, SelectionMode, &[&str])] = &[
    (
        1,
        "分野",
        SelectionMode::Multi,
        &[
            "急性期病院",
            "一般病院",
            "外来クリニック",
            "透析・外来クリニック",
            "健診",
            "訪問看護",
            "介護福祉施設",
        ],
    ),
    (
        2,
        "地域",
        SelectionMode::Multi,
        &[
            "神奈川県川崎市",
            "神奈川県横浜市",
            "東京都昭島市",
            "東京都立川市",
            "埼玉県狭山市",
        ],
    ),
    (
        3,
        "年代",
        SelectionMode::Single,
        &["20代", "30代", "40代", "50代以上"],
    ),
    (
        4,
        "キャリア",
        SelectionMode::Multi,
        &["キャリアを積みたい", "キャリアを活かしたい"],
    ),
    (5, "宿直", SelectionMode::Multi, &["宿直あり", "宿直なし"]),
];

const CANDIDATES: &[(&str, &str, &str)] = &[
    ("A1", "川崎幸病院", "https://saiwaihp.jp/recruit/"),
    (
        "A2",
        "横浜石心会病院",
        "https://yokohama-sekishinkai.jp/employment/",
    ),
    (
        "A3",
        "川崎地域ケア病院",
        "https://kawasaki-carehp.jp/recruit/",
    ),
    ("A4", "川崎幸クリニック", "https://saiwaicl.jp/employment/"),
    (
        "A5",
        "第二川崎幸クリニック",
        "https://saiwaicl-2.jp/employment/",
    ),
    ("A6", "新緑脳神経外科", "https://www.syck.jp/about/recruit"),
    ("A7", "川崎クリニック", "https://www.kawasakicl.jp/recruit/"),
    (
        "A8",
        "さいわい鹿島田クリニック",
        "https://www.kashimadacl.jp/recruit/",
    ),
    (
        "A9",
        "川崎健診クリニック",
        "https://www.alpha-medic.gr.jp/job_offer.html",
    ),
    (
        "A10",
        "アルファメディック・クリニック",
        "https://www.alpha-medic.gr.jp/job_offer.html",
    ),
    (
        "A11",
        "さいわい訪問看護ステーション",
        "https://sekishinkai-zaitaku.jp/houmonkango/recruit/",
    ),
    (
        "A12",
        "立川新緑クリニック",
        "https://www.tachikawashinryoku.jp/recruit/",
    ),
    (
        "A13",
        "昭島腎クリニック",
        "https://www.akishima-jin.jp/recruit/",
    ),
    (
        "A14",
        "立川訪問看護ステーションわかば",
        "https://www.tachikawawakaba.jp/recruit/",
    ),
    (
        "A15",
        "立川介護老人保健施設わかば",
        "https://www.tachikawawakaba.jp/recruit/",
    ),
    (
        "A16",
        "埼玉石心会病院",
        "https://saitama-sekishinkai-nurse.jp/",
    ),
    (
        "A17",
        "さやま総合クリニック",
        "https://r4510.jp/sekishinkai-sayama-cl/search/area-110000/office-%82%B3%82%E2%82%DC%91%8D%8D%87%83N%83%8A%83j%83b%83N,%82%B3%82%E2%82%DC%91%8D%8D%87%83N%83%8A%83j%83b%83N%20%8C%92%90f%83Z%83%93%83%5E%81%5B/1.html?utm_source=sekishinkai-sayama-cl&utm_medium=referral&utm_campaign=me-ma",
    ),
    (
        "A18",
        "さやま地域ケアクリニック",
        "https://sayama-care.jp/recruit/",
    ),
    (
        "A19",
        "さやま腎クリニック",
        "https://sekishinkai-sayama-jin.jp/recruit/",
    ),
    (
        "A20",
        "いきいき訪問看護ステーション鵜ノ木",
        "https://saitama-sekishinkai.jp/localcare/ikiiki.php",
    ),
    (
        "A21",
        "特別養護老人ホームオリーブ",
        "https://sayama-olive.jp/recruit/",
    ),
];

// One option may contribute to any number of candidates.
const MAPPING: &[(&str, &[&str])] = &[
    ("急性期病院", &["A1", "A16"]),
    ("一般病院", &["A2", "A3"]),
    ("外来クリニック", &["A4", "A5", "A6", "A12", "A17", "A18"]),
    ("透析・外来クリニック", &["A7", "A8", "A13", "A19"]),
    ("健診", &["A9", "A10"]),
    ("訪問看護", &["A11", "A14", "A20"]),
    ("介護福祉施設", &["A15", "A21"]),
    (
        "神奈川県川崎市",
        &["A1", "A3", "A4", "A5", "A7", "A8", "A9", "A10", "A11"],
    ),
    ("神奈川県横浜市", &["A2", "A6"]),
    ("東京都昭島市", &["A13"]),
    ("東京都立川市", &["A12", "A14", "A15"]),
    (
        "埼玉県狭山市",
        &["A16", "A17", "A18", "A19", "A20", "A21"],
    ),
    (
        "20代",
        &[
            "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "A13",
            "A14", "A15", "A16", "A17", "A18", "A19", "A20", "A21",
        ],
    ),
    (
        "30代",
        &[
            "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "A13", "A14", "A15", "A17",
            "A18", "A19", "A20", "A21",
        ],
    ),
    ("40代", &["A11", "A14", "A15", "A18", "A20", "A21"]),
    ("50代以上", &["A11", "A14", "A15", "A20", "A21"]),
    ("キャリアを積みたい", &["A1", "A2", "A16"]),
    (
        "キャリアを活かしたい",
        &[
            "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "A13", "A14", "A15",
            "A17", "A18", "A19", "A20", "A21",
        ],
    ),
    ("宿直あり", &["A1", "A2", "A3", "A16", "A18"]),
    (
        "宿直なし",
        &[
            "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "A13", "A14", "A15", "A17",
            "A19", "A20", "A21",
        ],
    ),
];

pub fn builtin() -> Catalog {
    let questions = QUESTIONS
        .iter()
        .map(|(id, text, mode, options)| Question {
            id: *id,
            text: text.to_string(),
            mode: *mode,
            options: options.iter().map(|option| option.to_string()).collect(),
        })
        .collect();

    let candidates = CANDIDATES
        .iter()
        .map(|(id, name, url)| {
            (
                CandidateId::new(*id),
                Candidate {
                    name: name.to_string(),
                    url: url.to_string(),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    let index = MAPPING
        .iter()
        .map(|(tag, ids)| {
            (
                tag.to_string(),
                ids.iter().copied().map(CandidateId::new).collect::<BTreeSet<_>>(),
            )
        })
        .collect::<BTreeMap<_, _>>();

    Catalog::new(questions, candidates, index, DEFAULT_THRESHOLD)
}
