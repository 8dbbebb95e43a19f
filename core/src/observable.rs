use core::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Observer<T> = Box<dyn FnMut(&T)>;

/// A value that notifies its subscribers whenever it changes.
///
/// Subscribers run synchronously inside [`Observable::set`], in the order they subscribed.
pub struct Observable<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u32,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, returns whether it was different from the previous one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }

        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
        true
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut label = Observable::new(String::new());
        {
            let seen = seen.clone();
            label.subscribe(move |value: &String| seen.borrow_mut().push(value.clone()));
        }

        assert!(label.set("Stop Baking".to_string()));
        assert!(!label.set("Stop Baking".to_string()));
        assert!(label.set("Start Baking".to_string()));

        assert_eq!(*seen.borrow(), ["Stop Baking", "Start Baking"]);
        assert_eq!(label.get(), "Start Baking");
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut elapsed = Observable::new(0u64);
        let id = {
            let calls = calls.clone();
            elapsed.subscribe(move |_| *calls.borrow_mut() += 1)
        };

        elapsed.set(1);
        assert!(elapsed.unsubscribe(id));
        assert!(!elapsed.unsubscribe(id));
        elapsed.set(2);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(elapsed.subscriber_count(), 0);
    }
}
