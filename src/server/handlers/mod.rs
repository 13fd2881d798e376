pub mod quotes;
pub mod service_types;
pub mod vehicles;

#[cfg(test)]
mod fake;
