use diffsol::{
    ConstantOp, LinearOp, NonLinearOp, NonLinearOpJacobian, OdeEquations, OdeEquationsRef, Op,
};

use super::CompiledNetwork;

type T = f64;
type V = nalgebra::DVector<f64>;
type M = nalgebra::DMatrix<f64>;

pub struct NetworkRhs<'a> {
    nstates: usize,
    network: &'a CompiledNetwork,
}

impl Op for NetworkRhs<'_> {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

pub struct NetworkMass {
    nstates: usize,
}

impl Op for NetworkMass {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

pub struct NetworkInit {
    nstates: usize,
    init: V,
}

impl Op for NetworkInit {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

pub struct NetworkRoot {
    nstates: usize,
}

impl Op for NetworkRoot {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

pub struct NetworkOut {
    nstates: usize,
}

impl Op for NetworkOut {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl NonLinearOp for NetworkRhs<'_> {
    fn call_inplace(&self, x: &Self::V, _t: Self::T, y: &mut Self::V) {
        self.network.rhs_inplace(x, y);
    }
}

impl NonLinearOpJacobian for NetworkRhs<'_> {
    fn jac_mul_inplace(&self, x: &Self::V, _t: Self::T, v: &Self::V, y: &mut Self::V) {
        self.network.jac_mul_inplace(x, v, y);
    }
}

impl LinearOp for NetworkMass {
    fn gemv_inplace(&self, _x: &Self::V, _t: Self::T, _beta: Self::T, _y: &mut Self::V) {}
}

impl ConstantOp for NetworkInit {
    fn call_inplace(&self, _t: Self::T, y: &mut Self::V) {
        y.copy_from(&self.init);
    }
}

impl NonLinearOp for NetworkRoot {
    fn call_inplace(&self, _x: &Self::V, _t: Self::T, _y: &mut Self::V) {}
}

impl NonLinearOp for NetworkOut {
    fn call_inplace(&self, _x: &Self::V, _t: Self::T, _y: &mut Self::V) {}
}

/// A compiled network plus its initial state, packaged for diffsol.
///
/// Rate constants are folded into the compiled polynomial coefficients, so
/// the problem exposes no solver-level parameters.
pub struct NetworkProblem {
    network: CompiledNetwork,
    nstates: usize,
    init: V,
}

impl NetworkProblem {
    pub fn new(network: CompiledNetwork, init: V) -> Self {
        let nstates = init.len();
        Self {
            network,
            nstates,
            init,
        }
    }
}

impl Op for NetworkProblem {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl<'b> OdeEquationsRef<'b> for NetworkProblem {
    type Rhs = NetworkRhs<'b>;
    type Mass = NetworkMass;
    type Init = NetworkInit;
    type Root = NetworkRoot;
    type Out = NetworkOut;
}

impl OdeEquations for NetworkProblem {
    fn rhs(&self) -> NetworkRhs<'_> {
        NetworkRhs {
            nstates: self.nstates,
            network: &self.network,
        }
    }

    fn mass(&self) -> Option<NetworkMass> {
        None
    }

    fn init(&self) -> NetworkInit {
        NetworkInit {
            nstates: self.nstates,
            init: self.init.clone(),
        }
    }

    fn get_params(&self, _p: &mut V) {}

    fn root(&self) -> Option<NetworkRoot> {
        None
    }

    fn out(&self) -> Option<NetworkOut> {
        None
    }

    fn set_params(&mut self, _p: &V) {}
}
