pub mod u901_partner_signup;
