mod extract_scenario_tests;
mod text_tests;
