use std::fmt;

use lutsim_core::accel::{Accelerator, BackendType};
use lutsim_core::common::{AccelError, Bank, ConfigWord, StatusWord};
use mockall::mock;

mock! {
    pub Accel {}
    impl Accelerator for Accel {
        fn backend_type(&self) -> BackendType;
        fn reset(&mut self, bank: Bank) -> Result<(), AccelError>;
        fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError>;
        fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError>;
        fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError>;
        fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError>;
    }
}

impl fmt::Debug for MockAccel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MockAccel")
    }
}

impl MockAccel {
    /// Mock that reports itself as simulated and answers every status read with zero.
    pub fn quiet() -> Self {
        let mut mock = Self::new();
        let _ = mock
            .expect_backend_type()
            .return_const(BackendType::Simulated);
        let _ = mock
            .expect_status()
            .returning(|_| Ok(StatusWord::default()));
        mock
    }
}
