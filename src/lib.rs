pub mod shared {
    pub mod infrastructure {
        pub mod workout_store;
    }
}

pub mod modules {
    pub mod workouts {
        pub mod core {
            pub mod exercise_name;
            pub mod journal;
            pub mod preset;
            pub mod workout;
        }
        pub mod application {
            pub mod errors;
            pub mod tracker;
        }
        pub mod use_cases {
            pub mod responses;
            pub mod log_workout {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_exercise {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_workouts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_preset {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_exercises {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_workout {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_workouts_by_date {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
