use crate::server::device::PaymentDevice;

#[derive(Clone)]
pub(crate) struct AppState {
    device: PaymentDevice,
}

impl AppState {
    pub fn new(device: PaymentDevice) -> Self {
        Self { device }
    }

    pub fn get_device(&self) -> &PaymentDevice {
        &self.device
    }
}
