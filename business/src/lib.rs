pub mod application {
    pub mod card {
        pub mod get_all;
        pub mod get_by_id;
        pub mod search;
        pub mod update_price;
    }
    pub mod pricing {
        pub mod apply_rarity_pricing;
        pub mod get_settings;
        pub mod update_settings;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod card {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod search;
            pub mod update_price;
        }
    }
    pub mod cart {
        pub mod model;
        pub mod pricing;
        pub mod storage;
        pub mod store;
    }
    pub mod pricing {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod apply_rarity_pricing;
            pub mod get_settings;
            pub mod update_settings;
        }
    }
}
