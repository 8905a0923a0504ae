pub mod attachment;
pub mod label;
pub mod parameter;
pub mod stage;
pub mod status;
pub mod test_result;

pub use self::attachment::Attachment;
pub use self::label::Label;
pub use self::parameter::Parameter;
pub use self::stage::Stage;
pub use self::status::{Status, StatusDetails};
pub use self::test_result::{ExecutableItem, StepResult, TestResult};
