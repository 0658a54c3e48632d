// Integration tests module

mod integration {
    mod failure_test;
    mod loader_test;
    mod report_scenarios_test;
}
