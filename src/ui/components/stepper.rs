use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDef {
    pub label: Option<String>,
}

impl StepDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// One rendered step: zero-padded number, label and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub number: usize,
    pub padded: String,
    pub label: String,
    pub status: StepStatus,
}

/// Position inside an ordered list of steps, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperState {
    steps: Vec<StepDef>,
    current_step: usize,
}

impl StepperState {
    pub fn new(steps: Vec<StepDef>, current_step: usize) -> Self {
        Self {
            steps,
            current_step,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn set_current_step(&mut self, step: usize) -> usize {
        self.current_step = step;
        step
    }

    /// Advances one step; `None` at the last step.
    pub fn next(&mut self) -> Option<usize> {
        (self.current_step < self.steps.len()).then(|| self.set_current_step(self.current_step + 1))
    }

    /// Goes back one step; `None` at the first step.
    pub fn previous(&mut self) -> Option<usize> {
        (self.current_step > 1).then(|| self.set_current_step(self.current_step - 1))
    }

    pub fn steps(&self) -> Vec<StepView> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let number = index + 1;
                let status = if number < self.current_step {
                    StepStatus::Completed
                } else if number == self.current_step {
                    StepStatus::Active
                } else {
                    StepStatus::Pending
                };
                StepView {
                    number,
                    padded: format!("{number:02}"),
                    label: step
                        .label
                        .clone()
                        .filter(|label| !label.is_empty())
                        .unwrap_or_else(|| format!("Step {number}")),
                    status,
                }
            })
            .collect()
    }

    /// `current/total`, as shown in the modal header.
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current_step, self.steps.len())
    }
}

/// Renders `state`. `on_step_change` fires once per change of the current step, not on mount.
#[component]
pub fn Stepper(state: StepperState, on_step_change: Option<EventHandler<usize>>) -> Element {
    let current = state.current_step();
    let mut announced = use_signal(|| current);
    use_effect(use_reactive((&current,), move |(current,)| {
        if *announced.peek() != current {
            announced.set(current);
            if let Some(handler) = on_step_change {
                handler.call(current);
            }
        }
    }));

    let steps = state.steps();
    let last = steps.len().saturating_sub(1);

    rsx! {
        div { class: "bk-stepper",
            for (index, step) in steps.into_iter().enumerate() {
                div {
                    key: "{step.number}",
                    class: match step.status {
                        StepStatus::Completed => "bk-stepper__step bk-stepper__step--completed",
                        StepStatus::Active => "bk-stepper__step bk-stepper__step--active",
                        StepStatus::Pending => "bk-stepper__step",
                    },
                    "data-step": "{step.number}",
                    div { class: "bk-stepper__step-circle",
                        span { class: "bk-stepper__step-number", "{step.padded}" }
                    }
                    div { class: "bk-stepper__step-label", "{step.label}" }
                }
                if index < last {
                    div { class: "bk-stepper__line" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> StepperState {
        StepperState::new(
            vec![StepDef::new("Framework Details"), StepDef::new("Control Items")],
            1,
        )
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut state = wizard();

        assert_eq!(state.previous(), None, "already at first");
        assert_eq!(state.next(), Some(2));
        assert_eq!(state.next(), None, "already at last");
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.previous(), Some(1));
    }

    #[test]
    fn steps_before_current_are_completed() {
        let mut state = wizard();
        state.set_current_step(2);

        let statuses: Vec<StepStatus> = state.steps().iter().map(|s| s.status).collect();
        assert_eq!(statuses, vec![StepStatus::Completed, StepStatus::Active]);
        assert_eq!(state.indicator(), "2/2");
    }

    #[test]
    fn numbers_are_padded_and_missing_labels_fall_back() {
        let state = StepperState::new(vec![StepDef::new("Intro"), StepDef::default()], 1);
        let steps = state.steps();

        assert_eq!(steps[0].padded, "01");
        assert_eq!(steps[1].label, "Step 2");
        assert_eq!(steps[1].status, StepStatus::Pending);
    }
}
