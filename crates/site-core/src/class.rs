/// Minimal view of an element's class list.
///
/// The web crate implements this over `web_sys::Element`; tests use an
/// in-memory fake. Methods take `&self` because DOM handles are shared
/// references with interior mutability.
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
    fn contains(&self, class: &str) -> bool;

    fn toggle(&self, class: &str) {
        if self.contains(class) {
            self.remove(class);
        } else {
            self.add(class);
        }
    }

    fn set(&self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}
