// ============================================================================
// REACTIVITY - Notificaciones de cambio para re-renderizar
// ============================================================================
// Los ViewModels avisan aquí cuando cambia su estado; la App se suscribe
// y agenda un re-render.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Canal de notificaciones compartido (los clones comparten subscribers)
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
    notifications: Rc<Cell<u64>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        self.notifications.set(self.notifications.get() + 1);
        // Copia de la lista: un callback puede suscribir a otros sin pánico de RefCell
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Total de notificaciones emitidas
    pub fn notifications(&self) -> u64 {
        self.notifications.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }

        notifier.clone().notify();
        notifier.notify();

        assert_eq!(hits.get(), 2);
        assert_eq!(notifier.notifications(), 2);
    }
}
