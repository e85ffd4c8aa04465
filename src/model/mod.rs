//! Pre-fitted model components deserialized from the bundle
//!
//! Nothing in here trains or fits anything: the classifier, scaler, and
//! label encoder arrive fully parametrized and are applied read-only.

pub mod classifier;
pub mod encoder;
pub mod scaler;

pub use classifier::LinearClassifier;
pub use encoder::LabelEncoder;
pub use scaler::StandardScaler;
