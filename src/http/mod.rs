// HTTP layer: one router per tier. Method checks happen inside the
// handlers because the two tiers answer a wrong method with different
// statuses (405 at the gateway, 404 at the temperature service).

pub mod gateway;
pub mod temperature;
