mod light;

pub use light::LightUsecases;
