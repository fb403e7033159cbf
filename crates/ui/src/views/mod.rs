mod register;
mod tracker;

pub use register::RegisterView;
pub use tracker::TrackerView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
