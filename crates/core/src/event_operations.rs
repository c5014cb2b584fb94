use crate::{
    event::{
        create_event::CreateEventUseCase, delete_event::DeleteEventUseCase,
        load_events::LoadEventsUseCase, update_event::UpdateEventUseCase,
    },
    shared::usecase::execute,
    toast::{IToaster, Toast, ToastStatus},
};
use dayplan_domain::{Event, EventForm};
use dayplan_infra::DayplanContext;
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the local list of `Event`s and keeps it in sync with the events api.
///
/// Every operation reports its outcome as a `Toast`. Failures are never
/// returned to the caller and leave the local list as it was.
pub struct EventOperations {
    ctx: DayplanContext,
    toaster: Arc<dyn IToaster>,
    editing: bool,
    on_save: Option<Box<dyn FnMut() + Send>>,
    events: Vec<Event>,
    sender: watch::Sender<Vec<Event>>,
    // Held so that `sender` always has a receiver and sends never fail
    receiver: watch::Receiver<Vec<Event>>,
}

impl EventOperations {
    pub fn new(ctx: DayplanContext, toaster: Arc<dyn IToaster>, editing: bool) -> Self {
        let (sender, receiver) = watch::channel(Vec::new());
        Self {
            ctx,
            toaster,
            editing,
            on_save: None,
            events: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Callback invoked once after every successful save
    pub fn with_on_save(mut self, on_save: impl FnMut() + Send + 'static) -> Self {
        self.on_save = Some(Box::new(on_save));
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Receiver that always holds the current list of `Event`s
    pub fn subscribe(&self) -> watch::Receiver<Vec<Event>> {
        self.receiver.clone()
    }

    fn toast(&self, title: &str, status: ToastStatus) {
        self.toaster.toast(Toast::new(title, status));
    }

    fn publish(&self) {
        let _ = self.sender.send(self.events.clone());
    }

    pub async fn load_events(&mut self) {
        match execute(LoadEventsUseCase, &self.ctx).await {
            Ok(events) => {
                self.events = events;
                self.publish();
            }
            Err(_) => self.toast("이벤트 로딩 실패", ToastStatus::Error),
        }
    }

    /// Creates the `Event` described by `form`, or updates it when in editing
    /// mode and the form carries an id.
    pub async fn save_event(&mut self, form: EventForm) {
        let title = match (self.editing, form.id.clone()) {
            (true, Some(id)) => {
                let usecase = UpdateEventUseCase {
                    event: form.into_event(id),
                };
                let event = match execute(usecase, &self.ctx).await {
                    Ok(event) => event,
                    Err(_) => return self.toast("일정 저장 실패", ToastStatus::Error),
                };
                match self.events.iter_mut().find(|e| e.id == event.id) {
                    Some(existing) => *existing = event,
                    None => self.events.push(event),
                }
                "일정이 수정되었습니다."
            }
            _ => {
                let usecase = CreateEventUseCase { form };
                let event = match execute(usecase, &self.ctx).await {
                    Ok(event) => event,
                    Err(_) => return self.toast("일정 저장 실패", ToastStatus::Error),
                };
                self.events.push(event);
                "일정이 추가되었습니다."
            }
        };

        self.publish();
        if let Some(on_save) = self.on_save.as_mut() {
            on_save();
        }
        self.toast(title, ToastStatus::Success);
    }

    pub async fn delete_event(&mut self, event_id: &str) {
        let usecase = DeleteEventUseCase {
            event_id: event_id.to_string(),
        };
        match execute(usecase, &self.ctx).await {
            Ok(()) => {
                self.events.retain(|e| e.id != event_id);
                self.publish();
                self.toast("일정이 삭제되었습니다.", ToastStatus::Info);
            }
            Err(_) => self.toast("일정 삭제 실패", ToastStatus::Error),
        }
    }
}
