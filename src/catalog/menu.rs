//! Static menu definition.
//!
//! This is the authoritative price source for the shop. The front-end renders
//! its own copy of the menu; nothing it sends is ever trusted for pricing.

/// One orderable item: name and unit price in whole JPY.
pub type MenuItem = (&'static str, u32);

/// A category and the items under it.
pub struct MenuCategory {
    pub category: &'static str,
    pub items: &'static [MenuItem],
}

/// Full menu, category by category.
pub const MENU_DATA: &[MenuCategory] = &[
    MenuCategory {
        category: "こってり",
        items: &[
            ("こってり", 950),
            ("味玉こってり", 1050),
            ("野菜こってり", 1150),
            ("豚増こってり", 1330),
        ],
    },
    MenuCategory {
        category: "あっさり",
        items: &[
            ("あっさり", 900),
            ("味玉あっさり", 1000),
            ("野菜あっさり", 1050),
            ("豚増あっさり", 1250),
        ],
    },
    MenuCategory {
        category: "汁無し",
        items: &[
            ("汁無し", 1000),
            ("チーズ汁無し", 1150),
            ("野菜汁無し", 1150),
            ("豚マシ汁無し", 1350),
        ],
    },
    MenuCategory {
        category: "油そば・飲み物",
        items: &[
            ("【冷】油そば", 800),
            ("【温】油そば", 800),
            ("コーラ", 250),
            ("ビール", 600),
        ],
    },
    MenuCategory {
        category: "トッピング・サイド",
        items: &[
            ("生卵", 100),
            ("全部", 450),
            ("味玉", 150),
            ("やさい", 250),
            ("チーズ", 300),
            ("のり", 300),
            ("ライス", 250),
            ("豚増", 400),
            ("かす増", 400),
            ("テイクアウトあぶらかす", 600),
            ("粒ニンニク", 400),
            ("麺特盛", 350),
            ("かす飯", 400),
        ],
    },
];
