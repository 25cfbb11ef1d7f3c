pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod change_count;
        pub mod get;
        pub mod init;
        pub mod remove_item;
        pub mod reset;
        pub mod session;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod outcome;
        pub mod reducer;
        pub mod repository;
        pub mod totals;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod change_count;
            pub mod get;
            pub mod init;
            pub mod remove_item;
            pub mod reset;
        }
    }
}
