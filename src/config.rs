use wucore::view::BackFromDetails;

#[derive(Clone, Debug)]
pub struct ControllerConfig {
    /// Where the back affordance lands from the details overlay.
    pub back_from_details: BackFromDetails,
    /// Clear a conversation's unread flag as it is opened.
    pub mark_read_on_open: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            back_from_details: BackFromDetails::default(),
            mark_read_on_open: true,
        }
    }
}
