//! Cross-module tests for the context core: the adapter flush contract and
//! registry behavior under concurrent stages.

#[cfg(test)]
mod tests {
    use crate::activity::{Activity, ChannelAccount, ConversationAccount};
    use crate::adapter::Adapter;
    use crate::context::{
        ContextDecorator, ConversationContext, ConversationReference, ServiceRegistry, TurnContext,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records what the dispatcher would have sent out.
    struct RecordingAdapter {
        sent: Mutex<Vec<(ConversationReference, Vec<Activity>)>>,
    }

    impl RecordingAdapter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl Adapter for RecordingAdapter {
        fn channel(&self) -> &str {
            "test"
        }

        async fn send_activities(
            &self,
            reference: &ConversationReference,
            activities: Vec<Activity>,
        ) -> anyhow::Result<()> {
            self.sent.lock().push((reference.clone(), activities));
            Ok(())
        }
    }

    fn inbound() -> Activity {
        Activity::message("hello")
            .with_id("a1")
            .with_from(ChannelAccount::new("userX"))
            .with_recipient(ChannelAccount::new("bot1"))
            .with_conversation(ConversationAccount::new("c1"))
            .with_channel_id("test")
            .with_service_url("http://x")
    }

    #[tokio::test]
    async fn test_adapter_flushes_drained_responses() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let adapter = RecordingAdapter::new();
        let mut ctx = TurnContext::new(adapter.clone(), inbound());

        ctx.reply("hi").reply("bye");

        let reference = ctx.conversation_reference().clone();
        let responses = ctx.take_responses();
        ctx.adapter()
            .send_activities(&reference, responses)
            .await
            .unwrap();

        let sent = adapter.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.activity_id.as_deref(), Some("a1"));
        assert_eq!(sent[0].1.len(), 2);
        assert_eq!(sent[0].1[0].text.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_proactive_send_via_stored_reference() {
        let adapter = RecordingAdapter::new();
        let reference = ConversationReference::new()
            .with_user(ChannelAccount::new("userY"))
            .with_bot(ChannelAccount::new("bot1"))
            .with_conversation(ConversationAccount::new("c9"))
            .with_channel_id("web")
            .with_service_url("http://y");

        let mut ctx = TurnContext::from_reference(adapter.clone(), reference);
        ctx.reply("reminder: your build finished");

        let reference = ctx.conversation_reference().clone();
        let responses = ctx.take_responses();
        ctx.adapter()
            .send_activities(&reference, responses)
            .await
            .unwrap();

        let sent = adapter.sent.lock();
        assert_eq!(sent[0].1[0].recipient, Some(ChannelAccount::new("userY")));
    }

    #[tokio::test]
    async fn test_adapter_reads_through_decorator() {
        let adapter = RecordingAdapter::new();
        let mut ctx = ContextDecorator::new(TurnContext::new(adapter.clone(), inbound()));

        ctx.reply("wrapped");

        let reference = ctx.conversation_reference().clone();
        let responses = ctx.take_responses();
        ctx.adapter()
            .send_activities(&reference, responses)
            .await
            .unwrap();

        assert_eq!(adapter.sent.lock()[0].1.len(), 1);
        assert!(ctx.inner().responses().is_empty());
    }

    #[tokio::test]
    async fn test_registry_survives_concurrent_distinct_writes() {
        let registry = Arc::new(ServiceRegistry::new());

        let writers: Vec<_> = (0..32)
            .map(|task| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    for round in 0..50 {
                        let key = format!("svc-{task}-{round}");
                        registry.set(&key, Arc::new(task * 100 + round)).unwrap();
                        let read_back = registry.get(&key).unwrap().unwrap();
                        assert_eq!(
                            read_back.downcast_ref::<i32>(),
                            Some(&(task * 100 + round))
                        );
                    }
                })
            })
            .collect();

        futures::future::try_join_all(writers).await.unwrap();

        // Every write must be present; none lost.
        assert_eq!(registry.len(), 32 * 50);
        for task in 0..32 {
            for round in 0..50 {
                assert!(registry.contains(&format!("svc-{task}-{round}")));
            }
        }
    }

    #[tokio::test]
    async fn test_registry_concurrent_same_key_converges() {
        let registry = Arc::new(ServiceRegistry::new());

        let writers: Vec<_> = (0..16_i64)
            .map(|task| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    for _ in 0..100 {
                        registry.set("contended", Arc::new(task)).unwrap();
                    }
                })
            })
            .collect();

        futures::future::try_join_all(writers).await.unwrap();

        // Whatever write landed last, the entry is intact and well-typed.
        let survivor = registry.get("contended").unwrap().unwrap();
        let value = *survivor.downcast_ref::<i64>().unwrap();
        assert!((0..16).contains(&value));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_context_shares_one_registry_across_stages() {
        let adapter = RecordingAdapter::new();
        let ctx = TurnContext::new(adapter, inbound());

        // One stage registers a typed service, another resolves it by type.
        struct SessionStore {
            hits: u32,
        }
        ctx.services().insert(SessionStore { hits: 9 });

        let store = ctx.services().resolve::<SessionStore>().unwrap();
        assert_eq!(store.hits, 9);
    }
}
