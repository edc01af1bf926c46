pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod notification_channel;
        pub mod object_store;
        pub mod preference_store;
    }
}

pub mod modules {
    pub mod reviews {
        pub mod errors;
        pub mod core {
            pub mod book;
            pub mod email_config;
            pub mod ledger;
            pub mod milestones;
            pub mod month;
            pub mod template;
        }
        pub mod use_cases {
            pub mod assign_slot {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_books {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod notify_reviewer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod export_books {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod preferences {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod error_mapping;
                pub mod session;
            }
            pub mod outbound {
                pub mod book_store;
                pub mod book_store_in_memory;
            }
        }
    }
}

pub mod shell;
