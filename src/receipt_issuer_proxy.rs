use multiversx_sc::proxy_imports::*;

use crate::types::Classification;

/// Issues one non-transferable receipt per donation and returns its id.
pub struct ReceiptIssuerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ReceiptIssuerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ReceiptIssuerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ReceiptIssuerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ReceiptIssuerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ReceiptIssuerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn issue<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<Classification>,
    >(
        self,
        donor: Arg0,
        pool_id: Arg1,
        amount: Arg2,
        title: Arg3,
        classification: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("issue")
            .argument(&donor)
            .argument(&pool_id)
            .argument(&amount)
            .argument(&title)
            .argument(&classification)
            .original_result()
    }
}
