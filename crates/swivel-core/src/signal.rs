use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Observable value. Cloning shares the underlying cell.
///
/// Subscribers run synchronously on the writing call. Within a component this
/// is the single-writer hand-off between derived visual state and decision
/// logic: observers only read the published value, they never mutate it.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Option<Box<dyn Fn(&T)>>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        // Take the subscriber list out so a subscriber may re-enter get/set.
        let subs = {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
            std::mem::take(&mut inner.subs)
        };
        for s in subs.iter().flatten() {
            s(&self.0.borrow().value);
        }
        let mut inner = self.0.borrow_mut();
        if inner.subs.is_empty() {
            inner.subs = subs;
        } else {
            // Subscriptions added during notification append after the originals.
            let added = std::mem::take(&mut inner.subs);
            inner.subs = subs;
            inner.subs.extend(added);
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let mut v = self.0.borrow().value.clone();
        f(&mut v);
        self.set(v);
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Box::new(f)));
        inner.subs.len() - 1
    }

    pub fn unsubscribe(&self, id: SubId) {
        let mut inner = self.0.borrow_mut();
        if let Some(slot) = inner.subs.get_mut(id) {
            *slot = None;
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_get_set_update() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);
        sig.set(100);
        assert_eq!(sig.get(), 100);
        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn subscription_fires_on_set() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = seen.clone();
        sig.subscribe(move |v| seen2.borrow_mut().push(*v));
        sig.set(1);
        sig.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let sig = signal(0);
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = sig.subscribe(move |_| *c.borrow_mut() += 1);
        sig.set(1);
        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn subscriber_may_read_back() {
        let sig = signal(5);
        let observed = Rc::new(RefCell::new(0));
        let o = observed.clone();
        let s = sig.clone();
        sig.subscribe(move |_| *o.borrow_mut() = s.get());
        sig.set(9);
        assert_eq!(*observed.borrow(), 9);
    }
}
