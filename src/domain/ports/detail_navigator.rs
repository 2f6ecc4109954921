//! Detail Navigator Port
//!
//! Brings the detail view of the selected record into focus.

pub trait DetailNavigator {
    fn show_detail(&self);
}

impl<D: DetailNavigator + ?Sized> DetailNavigator for &D {
    fn show_detail(&self) {
        (**self).show_detail()
    }
}
