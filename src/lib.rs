pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod application {
            pub mod errors;
            pub mod service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod mappers {
                pub mod employee_row_to_employee;
            }
            pub mod outbound {
                pub mod in_memory;
                pub mod sqlite;
            }
        }
    }
}

pub mod shell;
