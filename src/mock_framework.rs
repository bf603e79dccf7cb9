//! Test-only stand-in for a running `ResourceActor`.
//!
//! Client tests hold the receiving end of the mailbox and answer each
//! request by hand, so a `CartClient` can be checked for what it sends and
//! how it reacts to a given reply, without any cart store behind it.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A client wired to a mailbox the test reads from.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a `Create`.
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Get`.
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Action`; anything else yields `None`.
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cart, CartCreate};

    #[tokio::test]
    async fn test_scripted_create_reaches_caller() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let create_task = tokio::spawn(async move {
            client.create(CartCreate { shopper: "Test".to_string() }).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.shopper, "Test");
        responder.send(Ok("cart_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("cart_1".to_string()));
    }

    #[tokio::test]
    async fn test_expect_helpers_reject_other_requests() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let _task = tokio::spawn(async move { client.get("cart_1".to_string()).await });

        // A Get arriving where an Action is expected is a mismatch.
        assert!(expect_action(&mut receiver).await.is_none());
    }
}
