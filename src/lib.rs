pub mod shared {
    pub mod core {
        pub mod directory;
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod directory;
        pub mod event_store;
        pub mod signature_store;
    }
}

pub mod modules {
    pub mod time_records {
        pub mod adapters {
            pub mod outbound {
                pub mod ledger;
                pub mod ledger_in_memory;
            }
        }
        pub mod core {
            pub mod duration;
            pub mod events;
            pub mod evolve;
            pub mod integrity;
            pub mod sequence;
            pub mod state;
        }
        pub mod use_cases {
            pub mod submit_clock_action {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod effective_minutes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod current_status {
                pub mod handler;
                pub mod status;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_records {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod validate_change {
                pub mod command;
                pub mod handler;
                pub mod neighbours;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod apply_change {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod verify_integrity {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod reports {
        pub mod core {
            pub mod daily;
            pub mod period;
            pub mod policy;
            pub mod rollup;
            pub mod signatures;
            pub mod summaries;
        }
        pub mod use_cases {
            pub mod monthly_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod overtime_report {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_month {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod signature_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod export_report {
                pub mod csv;
                pub mod handler;
                pub mod pdf;
                pub mod subject;
                pub mod xlsx;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod clock_day_flow_tests;
    }
}
