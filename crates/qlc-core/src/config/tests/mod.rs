mod config_set_tests;
