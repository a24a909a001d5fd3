pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod create;
        pub mod get;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod id_generator;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod create;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
