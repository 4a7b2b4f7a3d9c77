mod browser_scenarios;
mod login_rules;
