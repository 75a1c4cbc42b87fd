mod common;

#[cfg(test)]
mod tests {
    use super::common::{form, DbContext, ScriptedView};
    use taskdesk::libs::messages::Message;
    use taskdesk::libs::task::TaskFilter;
    use taskdesk::libs::task_board::TaskBoard;
    use taskdesk::libs::view::{CategoryEvent, TaskEvent};
    use test_context::test_context;

    #[test_context(DbContext)]
    #[test]
    fn test_init_loads_tasks_and_both_selectors(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report"]);
        ctx.seed("Home", &["Water plants"]);
        ctx.db.tasks().set_done("Water plants", true).unwrap();

        let board = TaskBoard::new(&ctx.db, ScriptedView::default()).unwrap();
        let view = board.view();

        assert_eq!(board.filter(), &TaskFilter::All);
        assert_eq!(view.shown_tasks.len(), 2);
        assert!(!view.shown_tasks[0].checked);
        assert!(view.shown_tasks[1].checked);
        assert_eq!(view.assignable, vec!["Work", "Home"]);
        assert_eq!(view.filters, vec!["Work", "Home", ""]);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_add_task_resolves_category(ctx: &mut DbContext) {
        ctx.seed("Work", &[]);
        let mut view = ScriptedView::default();
        view.forms.push_back(form("Write report", "Draft v1", "Work"));

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        assert!(board.add_task().unwrap());

        let items = board.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Write report");
        assert_eq!(items[0].description, "Draft v1");
        assert!(!items[0].checked);
        assert_eq!(board.view().shown_tasks, items);
        assert_eq!(ctx.db.tasks().find_category_title("Write report").unwrap().as_deref(), Some("Work"));
    }

    #[test_context(DbContext)]
    #[test]
    fn test_add_task_stores_form_as_typed(ctx: &mut DbContext) {
        ctx.seed("Work", &[]);
        let mut view = ScriptedView::default();
        view.forms.push_back(form(" Write report ", "", "Work"));

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        assert!(board.add_task().unwrap());

        let task = ctx.db.tasks().get_by_title(" Write report ").unwrap().unwrap();
        assert_eq!(task.description.as_deref(), Some(""));
        assert!(ctx.db.tasks().get_by_title("Write report").unwrap().is_none());
    }

    #[test_context(DbContext)]
    #[test]
    fn test_add_task_with_unknown_category_inserts_nothing(ctx: &mut DbContext) {
        ctx.seed("Work", &[]);
        let mut view = ScriptedView::default();
        view.forms.push_back(form("Write report", "", "Garden"));

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        assert!(!board.add_task().unwrap());

        assert!(ctx.task_titles(&TaskFilter::All).is_empty());
        assert_eq!(board.view().notifications, vec![Message::CategoryNotFound("Garden".into())]);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_add_task_with_blank_title_inserts_nothing(ctx: &mut DbContext) {
        ctx.seed("Work", &[]);
        let mut view = ScriptedView::default();
        view.forms.push_back(form("   ", "", "Work"));

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        assert!(!board.add_task().unwrap());
        assert!(ctx.task_titles(&TaskFilter::All).is_empty());
        assert_eq!(board.view().notifications, vec![Message::TaskTitleRequired]);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_select_task_shows_detail_and_persists_checkbox(ctx: &mut DbContext) {
        let work = ctx.seed("Work", &[]);
        ctx.db.tasks().add("Write report", Some("Draft v1"), work).unwrap();

        let mut board = TaskBoard::new(&ctx.db, ScriptedView::default()).unwrap();
        board.select_task(0, true).unwrap();

        assert_eq!(board.view().detail, Some(("Write report".into(), "Draft v1".into())));
        assert_eq!(board.view().assigned.as_deref(), Some("Work"));
        assert_eq!(board.current().map(|i| i.title.as_str()), Some("Write report"));
        assert!(ctx.db.tasks().get_by_title("Write report").unwrap().unwrap().done);
        assert!(board.view().shown_tasks[0].checked);

        board.reload_tasks().unwrap();
        assert!(board.items()[0].checked);

        board.select_task(0, false).unwrap();
        board.reload_tasks().unwrap();
        assert!(!board.items()[0].checked);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_select_out_of_range_is_ignored(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report"]);
        let mut board = TaskBoard::new(&ctx.db, ScriptedView::default()).unwrap();
        board.select_task(5, true).unwrap();
        assert!(board.current().is_none());
        assert!(!ctx.db.tasks().get_by_title("Write report").unwrap().unwrap().done);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_delete_task_requires_selection_and_confirmation(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report", "Call client"]);
        let mut view = ScriptedView::default();
        view.confirms.extend([false, true]);

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        assert!(!board.delete_task().unwrap());
        assert_eq!(board.view().notifications, vec![Message::NoTaskSelected]);

        board.select_task(1, false).unwrap();
        assert!(!board.delete_task().unwrap());
        assert_eq!(ctx.task_titles(&TaskFilter::All).len(), 2);

        assert!(board.delete_task().unwrap());
        assert_eq!(ctx.task_titles(&TaskFilter::All), vec!["Write report"]);
        assert_eq!(board.items().len(), 1);
        assert!(board.current().is_none());
        assert_eq!(board.view().questions[1], Message::ConfirmDeleteTask("Call client".into()).to_string());
    }

    #[test_context(DbContext)]
    #[test]
    fn test_filter_restricts_list(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report", "Call client"]);
        ctx.seed("Home", &["Water plants"]);

        let mut board = TaskBoard::new(&ctx.db, ScriptedView::default()).unwrap();
        board.set_filter("Home").unwrap();
        let titles: Vec<&str> = board.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Water plants"]);

        board.set_filter("").unwrap();
        assert_eq!(board.items().len(), 3);
        assert_eq!(board.filter(), &TaskFilter::All);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_category_manager_closes_into_reload(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report"]);
        ctx.seed("Home", &["Water plants"]);

        let mut view = ScriptedView::default();
        view.dialog.prompts.push_back(Some("Garden".into()));
        view.dialog.confirms.push_back(true);
        view.dialog.events.extend([CategoryEvent::Add, CategoryEvent::Select(0), CategoryEvent::Delete, CategoryEvent::Close]);

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        board.set_filter("Work").unwrap();
        board.open_category_manager().unwrap();

        assert_eq!(board.view().dialogs_opened, 1);
        assert_eq!(board.categories(), ["Home", "Garden"]);
        assert_eq!(board.view().filters, vec!["Home", "Garden", ""]);
        assert_eq!(board.filter(), &TaskFilter::All);
        let titles: Vec<&str> = board.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Water plants"]);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_run_dispatches_events_and_survives_failures(ctx: &mut DbContext) {
        ctx.seed("Work", &["Write report"]);

        let mut view = ScriptedView::default();
        view.forms.push_back(form("Write report", "", "Work"));
        view.forms.push_back(form("Call client", "", "Work"));
        view.events.extend([
            TaskEvent::Add,
            TaskEvent::Add,
            TaskEvent::Select { index: 1, checked: true },
            TaskEvent::FilterChanged("Work".into()),
            TaskEvent::Quit,
            TaskEvent::Add,
        ]);

        let mut board = TaskBoard::new(&ctx.db, view).unwrap();
        board.run().unwrap();

        let view = board.into_view();
        assert!(matches!(view.notifications[0], Message::ActionFailed(_)));
        assert_eq!(view.notifications[1], Message::TaskCreated("Call client".into()));
        assert!(ctx.db.tasks().get_by_title("Call client").unwrap().unwrap().done);
        assert_eq!(view.events.len(), 1);
        assert_eq!(view.shown_tasks.len(), 2);
    }
}
